use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// Decodes one database row into a model.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Decodes every row, failing on the first row that does not fit the model.
pub fn decode_rows<T: TryFromRow<PgRow>>(rows: &[PgRow]) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
    rows.iter().map(T::try_from_row).collect()
}

fn bounded<const N: usize>(
    col_name: &str,
    value: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for column '{col_name}' exceeds {N} characters").into())
}

/// Reads a NOT NULL bounded text column.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let value: String = row.try_get(col_name)?;
    bounded(col_name, &value)
}

pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let value: Option<String> = row.try_get(col_name)?;
    value.map(|v| bounded(col_name, &v)).transpose()
}

/// Reads the aliased id column of an outer-joined child. `None` means the
/// join produced no child for this row.
pub fn get_joined_id(row: &PgRow, col_name: &str) -> Result<Option<i64>, Box<dyn Error + Send + Sync>> {
    Ok(row.try_get::<Option<i64>, _>(col_name)?)
}
