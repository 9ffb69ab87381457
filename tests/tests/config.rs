//! Schemas loaded from JSON configuration.

use tabguard_tests::catalog::{CHECK_CODE_SUBJ, CHECK_CROSS_WALK};
use tabguard_tests::prelude::*;
use tabguard_validate::StructuralCheck;

const CATALOG_CONFIG: &str = r#"{
    "columns": [
        {
            "name": "Course Control Number (CB00)",
            "starts_with": "CCC000",
            "allow_missing": false,
            "allow_duplicates": false
        },
        {"name": "Course Code (CB01)", "pattern": "[A-Z]+[0-9]+[A-Z]*"},
        {"name": "Course Credit Status (CB04)", "one_of": ["D", "C", "N"]},
        {"name": "Course Program Status (CB24)", "type": "integer", "one_of": [1, 2]},
        {
            "name": "Curriculum Id*",
            "type": "string",
            "allow_missing": false,
            "allow_duplicates": false,
            "starts_with": "C",
            "pattern": "^C[A-Z]+-[0-9]+[A-Z]*"
        }
    ],
    "expect": {
        "rows": 4,
        "columns": 12,
        "column_names": ["Course Control Number (CB00)", "Course Code (CB01)", "Curriculum Id*"]
    }
}"#;

fn schema_from_config(json: &str) -> Schema {
    let mut builder = SchemaConfig::from_json_str(json)
        .unwrap()
        .into_builder()
        .unwrap();
    catalog::add_cross_checks(&mut builder).unwrap();
    builder.build().unwrap()
}

mod catalog_config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_schema_accepts_clean_catalog() {
        // GIVEN
        init_tracing();
        let schema = schema_from_config(CATALOG_CONFIG);

        // WHEN
        let report = validate(&schema, &catalog::dataset().unwrap()).unwrap();

        // THEN
        assert!(report.is_clean());
        assert_eq!(report.structure().len(), 3);
        assert!(report.structure().iter().all(|finding| finding.passed));
    }

    #[test]
    fn test_config_and_builder_agree() {
        // GIVEN
        init_tracing();
        let from_config = schema_from_config(CATALOG_CONFIG);
        let from_builder = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        data.set(&RowLabel::from(2), columns::CREDIT_STATUS, Value::from("Q"))
            .unwrap();
        data.set(&RowLabel::from(0), columns::CODE, Value::from("ENGL-1A"))
            .unwrap();

        // WHEN
        let a = validate(&from_config, &data).unwrap();
        let b = validate(&from_builder, &data).unwrap();

        // THEN
        for (column, rule) in [
            (columns::CREDIT_STATUS, RuleKind::OneOf),
            (columns::CODE, RuleKind::Pattern),
            (columns::CURRICULUM_ID, RuleKind::StartsWith),
        ] {
            assert_eq!(a.rule(column, rule), b.rule(column, rule));
        }
        assert_eq!(a.cross_outcomes(), b.cross_outcomes());
        assert_eq!(
            a.cross_violations(CHECK_CODE_SUBJ),
            Some(labels![0].as_slice())
        );
        assert_eq!(a.cross_violations(CHECK_CROSS_WALK), Some(labels![].as_slice()));
    }

    #[test]
    fn test_structural_mismatch_is_reported_not_raised() {
        // GIVEN
        init_tracing();
        let config = CATALOG_CONFIG.replace(r#""rows": 4"#, r#""rows": 40"#);
        let schema = schema_from_config(&config);

        // WHEN
        let report = validate(&schema, &catalog::dataset().unwrap()).unwrap();

        // THEN
        let failed: Vec<_> = report
            .structure()
            .iter()
            .filter(|finding| !finding.passed)
            .collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].check, StructuralCheck::RowCount);
        assert_eq!(failed[0].actual, "4");
        assert!(!report.is_clean());
    }
}

mod config_errors {
    use super::*;

    #[test]
    fn test_empty_one_of_rejected() {
        let result = SchemaConfig::from_json_str(r#"{"columns": [{"name": "a", "one_of": []}]}"#)
            .unwrap()
            .into_builder();

        assert!(matches!(result, Err(SchemaError::EmptyAllowedValues { .. })));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = SchemaConfig::from_json_str(
            r#"{"columns": [{"name": "a"}, {"name": "a", "allow_missing": false}]}"#,
        )
        .unwrap()
        .into_builder();

        assert!(matches!(result, Err(SchemaError::DuplicateColumn(name)) if name == "a"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = SchemaConfig::from_json_str(r#"{"columns": "#);

        assert!(matches!(result, Err(SchemaError::InvalidConfig(_))));
    }
}
