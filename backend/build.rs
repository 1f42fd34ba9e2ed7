use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html lang=\"ko\"><head><meta charset=\"utf-8\"><title>면접 지원하기</title></head>\
<body><p>Frontend bundle not built. Run <code>trunk build --release</code> in <code>frontend/</code>.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let bundle_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    }

    // `include_dir!` needs the directory to exist even without a frontend build.
    if !bundle_dir.join("index.html").exists() {
        fs::create_dir_all(&bundle_dir).unwrap();
        fs::write(bundle_dir.join("index.html"), PLACEHOLDER_INDEX).unwrap();
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
