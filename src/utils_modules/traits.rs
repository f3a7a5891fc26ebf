use crate::common::*;

/* PostgreSQL row → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromPgRow
where
    Self: Sized,
{
    fn from_pg_row(row: &Row) -> Result<Self, anyhow::Error>;
}
