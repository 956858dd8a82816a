//! Source-table columns consumed by the classifier.

use thiserror::Error;

/// Column carrying the record's category.
pub const CATEGORY: &str = "Category";
/// Column carrying the organization's display name.
pub const ORGANIZATION_NAME: &str = "Organization Name";
/// Column naming the kind of service provided.
pub const SERVICE_TYPE: &str = "Service Type";
/// Column with the free-text description of services offered.
pub const SERVICES_OFFERED: &str = "Services Offered";
/// Column flagging crisis services ("yes" / anything else).
pub const CRISIS_SERVICE: &str = "Crisis Service";

/// Every column the classifier reads, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    CATEGORY,
    ORGANIZATION_NAME,
    SERVICE_TYPE,
    SERVICES_OFFERED,
    CRISIS_SERVICE,
];

/// A header row lacked one or more required columns.
#[derive(Debug, Error)]
#[error("missing required columns: {}", .0.join(", "))]
pub struct MissingColumns(pub Vec<&'static str>);

/// Positions of the classifier's input columns within a header row.
#[derive(Debug, Clone, Copy)]
pub struct FieldIndex {
    pub category: usize,
    pub organization: usize,
    pub service_type: usize,
    pub services_offered: usize,
    pub crisis_service: usize,
}

impl FieldIndex {
    /// Locate the required columns in a header row. Names match exactly;
    /// a header that renames or drops a required column is malformed input.
    pub fn locate(headers: &[String]) -> Result<FieldIndex, MissingColumns> {
        let mut missing = Vec::new();
        let mut find = |name: &'static str| match headers.iter().position(|header| header == name)
        {
            Some(index) => index,
            None => {
                missing.push(name);
                0
            }
        };
        let index = FieldIndex {
            category: find(CATEGORY),
            organization: find(ORGANIZATION_NAME),
            service_type: find(SERVICE_TYPE),
            services_offered: find(SERVICES_OFFERED),
            crisis_service: find(CRISIS_SERVICE),
        };
        if missing.is_empty() {
            Ok(index)
        } else {
            Err(MissingColumns(missing))
        }
    }

    /// Borrow the classifier's inputs out of one row.
    ///
    /// Cells missing from a short row read as empty strings.
    pub fn fields<'a>(&self, row: &'a [String]) -> RecordFields<'a> {
        RecordFields {
            category: cell(row, self.category),
            organization: cell(row, self.organization),
            service_type: cell(row, self.service_type),
            services_offered: cell(row, self.services_offered),
            crisis_service: cell(row, self.crisis_service),
        }
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// One record's classifier inputs, borrowed from its row.
#[derive(Debug, Clone, Copy)]
pub struct RecordFields<'a> {
    pub category: &'a str,
    pub organization: &'a str,
    pub service_type: &'a str,
    pub services_offered: &'a str,
    pub crisis_service: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn locate_finds_columns_in_any_order() {
        let headers = headers(&[
            "Organization Name",
            "Address",
            "Crisis Service",
            "Service Type",
            "Category",
            "Services Offered",
        ]);
        let index = FieldIndex::locate(&headers).unwrap();
        assert_eq!(index.organization, 0);
        assert_eq!(index.crisis_service, 2);
        assert_eq!(index.service_type, 3);
        assert_eq!(index.category, 4);
        assert_eq!(index.services_offered, 5);
    }

    #[test]
    fn locate_reports_every_missing_column() {
        let headers = headers(&["Organization Name", "Phone", "Services Offered"]);
        let error = FieldIndex::locate(&headers).unwrap_err();
        assert_eq!(error.0, vec![CATEGORY, SERVICE_TYPE, CRISIS_SERVICE]);
        assert_eq!(
            error.to_string(),
            "missing required columns: Category, Service Type, Crisis Service"
        );
    }

    #[test]
    fn locate_requires_exact_names() {
        let headers = headers(&[
            "category",
            "Organization Name",
            "Service Type",
            "Services Offered",
            "Crisis Service",
        ]);
        let error = FieldIndex::locate(&headers).unwrap_err();
        assert_eq!(error.0, vec![CATEGORY]);
    }

    #[test]
    fn fields_default_missing_cells_to_empty() {
        let headers = headers(&REQUIRED_COLUMNS);
        let index = FieldIndex::locate(&headers).unwrap();
        let row = vec!["Mental Health".to_string(), "Open Door Clinic".to_string()];
        let fields = index.fields(&row);
        assert_eq!(fields.category, "Mental Health");
        assert_eq!(fields.organization, "Open Door Clinic");
        assert_eq!(fields.service_type, "");
        assert_eq!(fields.services_offered, "");
        assert_eq!(fields.crisis_service, "");
    }
}
