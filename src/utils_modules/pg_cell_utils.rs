use crate::common::*;

#[doc = r#"
    One column of a PostgreSQL row, read by its declared type.

    Integers of every width are widened to `i64`, FLOAT4/FLOAT8 to `f64`, and every text-like
    type to `String`. Columns of any other type are kept as `Unsupported(<type name>)` so the
    caller can report which column was mis-typed.
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum PgCell {
    Missing,
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Unsupported(String),
}

#[doc = "Reads `column` out of `row` according to the column's declared type"]
pub fn read_pg_cell(row: &Row, column: &str) -> anyhow::Result<PgCell> {
    let Some(column_def) = row.columns().iter().find(|c| c.name() == column) else {
        return Ok(PgCell::Missing);
    };

    let ty: &Type = column_def.type_();

    let cell: Option<PgCell> = if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(column)?
            .map(|v| PgCell::Int(i64::from(v)))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(column)?
            .map(|v| PgCell::Int(i64::from(v)))
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(column)?.map(PgCell::Int)
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(column)?
            .map(|v| PgCell::Float(f64::from(v)))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(column)?.map(PgCell::Float)
    } else if [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME].contains(ty) {
        row.try_get::<_, Option<String>>(column)?.map(PgCell::Text)
    } else {
        return Ok(PgCell::Unsupported(ty.name().to_string()));
    };

    Ok(cell.unwrap_or(PgCell::Null))
}

#[doc = "Required text column"]
pub fn cell_to_text(column: &str, cell: PgCell) -> anyhow::Result<String> {
    match cell {
        PgCell::Text(value) => Ok(value),
        other => Err(anyhow!(
            "[cell_to_text] column '{}' must be non-null text, found {}",
            column,
            describe(&other)
        )),
    }
}

#[doc = "Required integer column"]
pub fn cell_to_int(column: &str, cell: PgCell) -> anyhow::Result<i64> {
    match cell {
        PgCell::Int(value) => Ok(value),
        other => Err(anyhow!(
            "[cell_to_int] column '{}' must be a non-null integer, found {}",
            column,
            describe(&other)
        )),
    }
}

#[doc = "Required numeric column. Integers are accepted and widened."]
pub fn cell_to_float(column: &str, cell: PgCell) -> anyhow::Result<f64> {
    match cell_to_optional_float(column, cell)? {
        Some(value) => Ok(value),
        None => Err(anyhow!(
            "[cell_to_float] column '{}' must be a non-null number, found NULL or no column",
            column
        )),
    }
}

#[doc = "Optional numeric column: absent and NULL both read as `None`, anything non-numeric is an error"]
pub fn cell_to_optional_float(column: &str, cell: PgCell) -> anyhow::Result<Option<f64>> {
    match cell {
        PgCell::Missing | PgCell::Null => Ok(None),
        PgCell::Float(value) => Ok(Some(value)),
        PgCell::Int(value) => Ok(Some(value as f64)),
        other => Err(anyhow!(
            "[cell_to_optional_float] column '{}' is not numeric, found {}",
            column,
            describe(&other)
        )),
    }
}

fn describe(cell: &PgCell) -> String {
    match cell {
        PgCell::Missing => "no such column".to_string(),
        PgCell::Null => "NULL".to_string(),
        PgCell::Int(_) => "an integer".to_string(),
        PgCell::Float(_) => "a float".to_string(),
        PgCell::Text(_) => "text".to_string(),
        PgCell::Unsupported(type_name) => format!("type '{}'", type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_into_floats() {
        assert_eq!(cell_to_float("mir_coverage", PgCell::Int(1)).unwrap(), 1.0);
        assert_eq!(
            cell_to_optional_float("tests", PgCell::Int(12)).unwrap(),
            Some(12.0)
        );
    }

    #[test]
    fn absent_or_null_auxiliary_columns_are_none() {
        assert_eq!(cell_to_optional_float("tests_length", PgCell::Missing).unwrap(), None);
        assert_eq!(cell_to_optional_float("tests_length", PgCell::Null).unwrap(), None);
    }

    #[test]
    fn mistyped_cells_name_the_column_and_type() {
        let err: anyhow::Error = cell_to_int("gen", PgCell::Unsupported("numeric".to_string()))
            .unwrap_err();
        let message: String = err.to_string();
        assert!(message.contains("'gen'"));
        assert!(message.contains("numeric"));

        assert!(cell_to_text("crate", PgCell::Int(3)).is_err());
        assert!(cell_to_int("gen", PgCell::Float(99.0)).is_err());
        assert!(cell_to_optional_float("tests", PgCell::Text("n/a".to_string())).is_err());
    }

    #[test]
    fn required_columns_reject_null_and_missing() {
        assert!(cell_to_text("crate", PgCell::Null).is_err());
        assert!(cell_to_int("gen", PgCell::Missing).is_err());
        assert!(cell_to_float("mir_coverage", PgCell::Null).is_err());
    }
}
