use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::filter::{apply_filters, SearchFilters, SearchForm};
use tracing::warn;

/// Runs a search from raw form input. Never fails: unusable fields are
/// dropped and reported as warnings alongside the hits.
pub fn run(catalog: &Catalog, form: &SearchForm) -> CmdResult {
    let (filters, ignored) = SearchFilters::from_form(form);
    let hits: Vec<_> = apply_filters(catalog.records(), &filters)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    for criterion in &ignored {
        warn!(field = %criterion.field, raw = %criterion.raw, "ignoring search criterion");
        result.add_message(CmdMessage::warning(format!(
            "Ignored {}: {:?} is not a valid value",
            criterion.field, criterion.raw
        )));
    }

    let noun = if hits.len() == 1 { "property" } else { "properties" };
    result.add_message(CmdMessage::info(format!(
        "{} {} found",
        hits.len(),
        noun
    )));

    result.ignored = ignored;
    result.with_listed(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::filter::FilterField;
    use crate::model::fixtures::sample_records;

    fn catalog() -> Catalog {
        Catalog::from_records(sample_records()).unwrap()
    }

    #[test]
    fn empty_form_lists_everything() {
        let result = run(&catalog(), &SearchForm::default());
        assert_eq!(result.listed.len(), 2);
        assert!(result.ignored.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "2 properties found");
    }

    #[test]
    fn filters_by_type_from_form() {
        let form = SearchForm {
            property_type: Some("Flat".into()),
            ..Default::default()
        };
        let result = run(&catalog(), &form);
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id.0, 2);
        assert_eq!(result.messages[0].content, "1 property found");
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let form = SearchForm {
            max_price: Some("cheap".into()),
            postcode_area: Some("nw".into()),
            ..Default::default()
        };
        let result = run(&catalog(), &form);

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.ignored.len(), 1);
        assert_eq!(result.ignored[0].field, FilterField::MaxPrice);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("max price"));
    }
}
