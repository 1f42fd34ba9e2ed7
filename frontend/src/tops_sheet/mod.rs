mod top_sheet;

pub use top_sheet::TopSheet;
