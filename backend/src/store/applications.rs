use super::{from_sql_timestamp, to_sql_timestamp, Store, StoreError};
use chrono::{DateTime, Utc};
use common::model::application::{Application, NewApplication, Region};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

const COLUMNS: &str = "id, name, contact, region, privacy_consent, checkbox_selection, \
     referrer_url, utm_source, utm_medium, utm_campaign, source, \
     delivered_at, delivered_to, created_at, updated_at";

fn conversion_error(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Application> {
    let region: String = row.get(3)?;
    let selection: String = row.get(5)?;
    let delivered_at: Option<String> = row.get(11)?;
    let created_at: String = row.get(13)?;
    let updated_at: String = row.get(14)?;

    Ok(Application {
        id: row.get(0)?,
        name: row.get(1)?,
        contact: row.get(2)?,
        region: region.parse::<Region>().map_err(|e| conversion_error(3, e))?,
        privacy_consent: row.get(4)?,
        checkbox_selection: serde_json::from_str(&selection).map_err(|e| conversion_error(5, e))?,
        referrer_url: row.get(6)?,
        utm_source: row.get(7)?,
        utm_medium: row.get(8)?,
        utm_campaign: row.get(9)?,
        source: row.get(10)?,
        delivered_at: delivered_at
            .as_deref()
            .map(|raw| from_sql_timestamp(11, raw))
            .transpose()?,
        delivered_to: row.get(12)?,
        created_at: from_sql_timestamp(13, &created_at)?,
        updated_at: from_sql_timestamp(14, &updated_at)?,
    })
}

impl Store {
    /// Inserts one lead. The id and timestamps are assigned here.
    pub fn insert_application(&self, new: &NewApplication) -> Result<Application, StoreError> {
        let conn = self.connect()?;
        let id = Uuid::new_v4().to_string();
        let now = to_sql_timestamp(&Utc::now());
        let selection = serde_json::to_string(&new.checkbox_selection)?;

        conn.execute(
            "INSERT INTO consultation_applications (
                 id, name, contact, region, privacy_consent, checkbox_selection,
                 referrer_url, utm_source, utm_medium, utm_campaign, source,
                 created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
            params![
                &id,
                &new.name,
                &new.contact,
                new.region.label(),
                new.privacy_consent,
                &selection,
                &new.referrer_url,
                &new.utm_source,
                &new.utm_medium,
                &new.utm_campaign,
                &new.source,
                &now,
            ],
        )?;

        self.get_application(&id)?
            .ok_or(StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn get_application(&self, id: &str) -> Result<Option<Application>, StoreError> {
        let conn = self.connect()?;
        let app = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM consultation_applications WHERE id = ?1"),
                params![id],
                map_row,
            )
            .optional()?;
        Ok(app)
    }

    /// Every lead, newest first. Unpaged.
    pub fn list_applications(&self) -> Result<Vec<Application>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM consultation_applications
             ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Deletes a lead. Returns whether a row matched.
    pub fn delete_application(&self, id: &str) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "DELETE FROM consultation_applications WHERE id = ?1",
            params![id],
        )?;
        Ok(affected > 0)
    }

    /// Sets or clears the delivered marker. No other column is touched.
    ///
    /// Returns the row after the update, or `None` if the id matched nothing.
    pub fn set_delivered(
        &self,
        id: &str,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Application>, StoreError> {
        let conn = self.connect()?;
        let affected = conn.execute(
            "UPDATE consultation_applications SET delivered_at = ?1 WHERE id = ?2",
            params![delivered_at.as_ref().map(to_sql_timestamp), id],
        )?;
        if affected == 0 {
            return Ok(None);
        }
        self.get_application(id)
    }
}
