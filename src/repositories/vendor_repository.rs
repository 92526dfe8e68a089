use crate::error::RepositoryError;
use crate::models::{
    CreateVendorRequest, EventVendor, LinkVendorRequest, LinkedVendor, UpdateVendorRequest,
    Vendor, VendorCategory, VendorLinkStatus,
};
use sqlx::PgPool;
use uuid::Uuid;

const VENDOR_COLUMNS: &str = r#"
    id, user_id, name, category, contact_name, email, phone, website, rating,
    notes, created_at, updated_at
"#;

/// Repository for vendors and their links to events
pub struct VendorRepository {
    pool: PgPool,
}

impl VendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, req: &CreateVendorRequest) -> Result<Vendor, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO vendors (user_id, name, category, contact_name, email, phone, website, rating, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {VENDOR_COLUMNS}
            "#
        );

        let vendor = sqlx::query_as::<_, Vendor>(&sql)
            .bind(user_id)
            .bind(&req.name)
            .bind(req.category.unwrap_or(VendorCategory::Other).as_str())
            .bind(&req.contact_name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(&req.website)
            .bind(req.rating)
            .bind(&req.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(vendor)
    }

    /// Find a vendor only if it belongs to `user_id`
    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Vendor>, RepositoryError> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE id = $1 AND user_id = $2");
        let vendor = sqlx::query_as::<_, Vendor>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vendor)
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        category: Option<VendorCategory>,
    ) -> Result<Vec<Vendor>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT {VENDOR_COLUMNS}
            FROM vendors
            WHERE user_id = $1 AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY name ASC
            "#
        );
        let vendors = sqlx::query_as::<_, Vendor>(&sql)
            .bind(user_id)
            .bind(category.map(|c| c.as_str()))
            .fetch_all(&self.pool)
            .await?;
        Ok(vendors)
    }

    /// Vendors linked to an event together with the link details
    pub async fn find_by_event(&self, event_id: Uuid) -> Result<Vec<LinkedVendor>, RepositoryError> {
        let sql = r#"
            SELECT
                v.id, v.user_id, v.name, v.category, v.contact_name, v.email, v.phone,
                v.website, v.rating, v.notes, v.created_at, v.updated_at,
                ev.status AS link_status,
                ev.agreed_cost,
                ev.notes AS link_notes
            FROM event_vendors ev
            JOIN vendors v ON v.id = ev.vendor_id
            WHERE ev.event_id = $1
            ORDER BY v.name ASC
        "#;
        let vendors = sqlx::query_as::<_, LinkedVendor>(sql)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(vendors)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateVendorRequest) -> Result<Vendor, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE vendors
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                contact_name = COALESCE($4, contact_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                website = COALESCE($7, website),
                rating = COALESCE($8, rating),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {VENDOR_COLUMNS}
            "#
        );
        let vendor = sqlx::query_as::<_, Vendor>(&sql)
            .bind(id)
            .bind(&req.name)
            .bind(req.category.map(|c| c.as_str()))
            .bind(&req.contact_name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(&req.website)
            .bind(req.rating)
            .bind(&req.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(vendor)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let rows_affected = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    /// Create or update the link between an event and a vendor
    pub async fn upsert_link(
        &self,
        event_id: Uuid,
        vendor_id: Uuid,
        req: &LinkVendorRequest,
    ) -> Result<EventVendor, RepositoryError> {
        let link = sqlx::query_as::<_, EventVendor>(
            r#"
            INSERT INTO event_vendors (event_id, vendor_id, status, agreed_cost, notes)
            VALUES ($1, $2, COALESCE($3, 'contacted'), $4, $5)
            ON CONFLICT (event_id, vendor_id) DO UPDATE
            SET status = COALESCE($3, event_vendors.status),
                agreed_cost = COALESCE($4, event_vendors.agreed_cost),
                notes = COALESCE($5, event_vendors.notes)
            RETURNING event_id, vendor_id, status, agreed_cost, notes, created_at
            "#,
        )
        .bind(event_id)
        .bind(vendor_id)
        .bind(req.status.map(|s| s.as_str()))
        .bind(req.agreed_cost)
        .bind(&req.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(link)
    }

    pub async fn remove_link(&self, event_id: Uuid, vendor_id: Uuid) -> Result<bool, RepositoryError> {
        let rows_affected =
            sqlx::query("DELETE FROM event_vendors WHERE event_id = $1 AND vendor_id = $2")
                .bind(event_id)
                .bind(vendor_id)
                .execute(&self.pool)
                .await?
                .rows_affected();
        Ok(rows_affected > 0)
    }

    /// Sum of agreed costs for vendors booked on an event
    pub async fn committed_spend(&self, event_id: Uuid) -> Result<rust_decimal::Decimal, RepositoryError> {
        let total: rust_decimal::Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(agreed_cost), 0)
            FROM event_vendors
            WHERE event_id = $1 AND status = $2
            "#,
        )
        .bind(event_id)
        .bind(VendorLinkStatus::Booked.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
