use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::job::{JobRow, NewJob};

/// Returns every stored posting in insertion order.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>> {
    let jobs = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at, id")
        .fetch_all(pool)
        .await?;
    Ok(jobs)
}

/// Inserts postings, updating any row that already has the same `external_id`.
/// Returns the number of rows written.
pub async fn upsert_jobs(pool: &PgPool, jobs: &[NewJob]) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut written = 0;

    for job in jobs {
        let result = sqlx::query(
            r#"
            INSERT INTO jobs
                (external_id, job_title, company, location, job_url,
                 role, experience_level, skills_required)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (external_id) DO UPDATE SET
                job_title = EXCLUDED.job_title,
                company = EXCLUDED.company,
                location = EXCLUDED.location,
                job_url = EXCLUDED.job_url,
                role = EXCLUDED.role,
                experience_level = EXCLUDED.experience_level,
                skills_required = EXCLUDED.skills_required
            "#,
        )
        .bind(&job.external_id)
        .bind(&job.job_title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.job_url)
        .bind(&job.role)
        .bind(&job.experience_level)
        .bind(&job.skills_required)
        .execute(&mut *tx)
        .await?;
        written += result.rows_affected();
    }

    tx.commit().await?;
    info!("Upserted {written} job postings");
    Ok(written)
}
