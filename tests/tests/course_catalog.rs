//! Course catalog integration tests.
//!
//! These tests validate the catalog fixture against its schema, first as
//! exported and then with individual cells corrupted.

use tabguard_tests::catalog::{
    CHECK_CODE_ID, CHECK_CODE_SUBJ, CHECK_CROSS_WALK, CHECK_SUBJ_NUM_ID,
};
use tabguard_tests::prelude::*;

fn corrupt(data: &mut Dataset, row: i32, column: &str, value: impl Into<Value>) {
    data.set(&RowLabel::from(row), column, value.into()).unwrap();
}

mod clean_catalog {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_catalog_has_no_violations() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let data = catalog::dataset().unwrap();

        // WHEN
        let report = validate(&schema, &data).unwrap();

        // THEN
        assert!(report.is_clean());
        assert_eq!(report.total_violations(), 0);
        assert_eq!(report.columns().len(), 8);
        assert_eq!(report.cross_outcomes().len(), 4);
    }

    #[test]
    fn test_configured_rules_are_evaluated() {
        init_tracing();
        let schema = catalog::schema().unwrap();
        let report = validate(&schema, &catalog::dataset().unwrap()).unwrap();

        let id = report.column(columns::CURRICULUM_ID).unwrap();
        assert_eq!(id.iter().filter(|(_, outcome)| outcome.is_evaluated()).count(), 5);
        assert_eq!(id.get(RuleKind::OneOf), &RuleOutcome::NotEvaluated);

        let code = report.column(columns::CODE).unwrap();
        assert_eq!(code.get(RuleKind::Pattern), &RuleOutcome::Passed);
        assert_eq!(code.get(RuleKind::Type), &RuleOutcome::NotEvaluated);
        assert_eq!(code.get(RuleKind::OneOf), &RuleOutcome::NotEvaluated);
    }

    #[test]
    fn test_type_verdicts() {
        init_tracing();
        let schema = catalog::schema().unwrap();
        let report = validate(&schema, &catalog::dataset().unwrap()).unwrap();

        let units = report.rule(columns::UNITS_MAX, RuleKind::Type).unwrap();
        let verdict = units.type_verdict().unwrap();
        assert_eq!(verdict.inferred, ColumnType::Float);
        assert_eq!(verdict.flag(), 1);

        let program = report.rule(columns::PROGRAM_STATUS, RuleKind::Type).unwrap();
        assert_eq!(program.type_verdict().unwrap().inferred, ColumnType::Integer);
    }
}

mod corrupted_catalog {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrong_curriculum_id_number() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 2, columns::CURRICULUM_ID, "CMATH-21");

        // WHEN
        let report = validate(&schema, &data).unwrap();

        // THEN
        assert_eq!(report.cross_violations(CHECK_CODE_SUBJ), Some(labels![].as_slice()));
        assert_eq!(report.cross_violations(CHECK_SUBJ_NUM_ID), Some(labels![2].as_slice()));
        assert_eq!(report.cross_violations(CHECK_CODE_ID), Some(labels![2].as_slice()));
        assert_eq!(report.cross_violations(CHECK_CROSS_WALK), Some(labels![2].as_slice()));
        assert!(report.column(columns::CURRICULUM_ID).unwrap().is_clean());
    }

    #[test]
    fn test_curriculum_id_without_prefix() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 0, columns::CURRICULUM_ID, "ENGL-1A");

        // WHEN
        let report = validate(&schema, &data).unwrap();

        // THEN
        let id = report.column(columns::CURRICULUM_ID).unwrap();
        assert_eq!(id.violations(RuleKind::StartsWith), labels![0].as_slice());
        assert_eq!(id.violations(RuleKind::Pattern), labels![0].as_slice());
        assert_eq!(id.violations(RuleKind::Duplicates), labels![].as_slice());
        assert_eq!(report.cross_violations(CHECK_CODE_ID), Some(labels![0].as_slice()));
    }

    #[test]
    fn test_duplicate_and_missing_control_numbers() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 1, columns::CONTROL_NUMBER, "CCC000100001");
        corrupt(&mut data, 3, columns::CONTROL_NUMBER, Value::Null);

        // WHEN
        let report = validate(&schema, &data).unwrap();

        // THEN
        let control = report.column(columns::CONTROL_NUMBER).unwrap();
        assert_eq!(control.violations(RuleKind::Duplicates), labels![0, 1].as_slice());
        assert_eq!(control.violations(RuleKind::Missing), labels![3].as_slice());
        assert_eq!(control.violations(RuleKind::StartsWith), labels![].as_slice());
    }

    #[test]
    fn test_missing_units_keep_float_type() {
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 3, columns::UNITS_MAX, f64::NAN);

        let report = validate(&schema, &data).unwrap();

        let units = report.column(columns::UNITS_MAX).unwrap();
        assert_eq!(units.violations(RuleKind::Missing), labels![3].as_slice());
        assert_eq!(units.get(RuleKind::Type).violation_count(), 0);
    }

    #[test]
    fn test_program_status_as_text() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 3, columns::PROGRAM_STATUS, "2");

        // WHEN
        let report = validate(&schema, &data).unwrap();

        // THEN
        let program = report.column(columns::PROGRAM_STATUS).unwrap();
        let verdict = program.get(RuleKind::Type).type_verdict().unwrap();
        assert_eq!(verdict.inferred, ColumnType::Mixed);
        assert_eq!(verdict.flag(), 0);
        assert_eq!(program.violations(RuleKind::OneOf), labels![3].as_slice());
        assert_eq!(program.total_violations(), 2);
    }

    #[test]
    fn test_text_rule_on_numeric_cell_is_an_error() {
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 1, columns::CODE, 101);

        let result = validate(&schema, &data);

        assert!(matches!(
            result,
            Err(ValidateError::RuleNotApplicable { rule: RuleKind::Pattern, .. })
        ));
    }
}

mod summaries {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corrupted_report() -> ValidationReport {
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset().unwrap();
        corrupt(&mut data, 1, columns::CREDIT_STATUS, "X");
        corrupt(&mut data, 2, columns::CREDIT_STATUS, "Y");
        corrupt(&mut data, 2, columns::CURRICULUM_ID, "CMATH-21");
        validate(&schema, &data).unwrap()
    }

    #[test]
    fn test_column_summary_counts() {
        // GIVEN
        init_tracing();
        let report = corrupted_report();

        // WHEN
        let summary = report.column_summary();

        // THEN
        assert_eq!(summary.get(columns::CREDIT_STATUS, RuleKind::OneOf), Some(2));
        assert_eq!(summary.get(columns::CURRICULUM_ID, RuleKind::Pattern), Some(0));
        assert_eq!(summary.get(columns::SUBJECT, RuleKind::OneOf), None);
        assert_eq!(
            summary.violating_columns().collect::<Vec<_>>(),
            vec![columns::CREDIT_STATUS]
        );
    }

    #[test]
    fn test_cross_summary_counts() {
        init_tracing();
        let summary = corrupted_report().cross_summary();

        assert_eq!(
            summary.names(),
            [CHECK_CODE_SUBJ, CHECK_SUBJ_NUM_ID, CHECK_CODE_ID, CHECK_CROSS_WALK]
                .map(String::from)
                .as_slice()
        );
        assert_eq!(summary.get(CHECK_CODE_SUBJ), Some(Some(0)));
        assert_eq!(summary.get(CHECK_SUBJ_NUM_ID), Some(Some(1)));
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_summary_renders_one_line_per_rule() {
        init_tracing();
        let rendered = corrupted_report().column_summary().to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains(columns::CURRICULUM_ID));
        assert!(lines[4].starts_with("one_of"));
    }
}

mod reuse {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_reused_across_datasets() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let validator = SchemaValidator::new(&schema);
        let mut dirty = catalog::dataset().unwrap();
        corrupt(&mut dirty, 0, columns::TRANSFER_STATUS, "Z");

        // WHEN
        let first = validator.validate(&dirty).unwrap();
        let second = validator.validate(&catalog::dataset().unwrap()).unwrap();
        let third = validator.validate(&dirty).unwrap();

        // THEN
        assert_eq!(first.total_violations(), 1);
        assert!(second.is_clean());
        assert_eq!(first, third);
    }

    #[test]
    fn test_custom_row_labels_flow_through() {
        // GIVEN
        init_tracing();
        let schema = catalog::schema().unwrap();
        let mut data = catalog::dataset()
            .unwrap()
            .with_labels(labels!["ENGL-1A", "MATH-101", "MATH-20", "ESL-5"])
            .unwrap();
        data.set(&RowLabel::from("ESL-5"), columns::CODE, Value::from("ESL05"))
            .unwrap();

        // WHEN
        let report = validate(&schema, &data).unwrap();

        // THEN
        assert_eq!(
            report.cross_violations(CHECK_CODE_SUBJ),
            Some(labels!["ESL-5"].as_slice())
        );
        assert_eq!(
            report.cross_violations(CHECK_CODE_ID),
            Some(labels!["ESL-5"].as_slice())
        );
    }
}

mod failing_cross_checks {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema_with_broken_check(policy: CrossFailurePolicy) -> Schema {
        let mut builder = SchemaBuilder::new();
        catalog::add_columns(&mut builder).unwrap();
        catalog::add_cross_checks(&mut builder).unwrap();
        builder
            .add_cross_check(CrossCheck::composite(
                "check_term",
                "Term",
                vec![KeyPart::column(columns::SUBJECT)],
            ))
            .unwrap()
            .on_cross_failure(policy);
        builder.build().unwrap()
    }

    #[test]
    fn test_missing_column_aborts_by_default() {
        init_tracing();
        let schema = schema_with_broken_check(CrossFailurePolicy::FailFast);

        let result = validate(&schema, &catalog::dataset().unwrap());

        assert!(matches!(
            result,
            Err(ValidateError::CrossCheckFailed { name, .. }) if name == "check_term"
        ));
    }

    #[test]
    fn test_missing_column_collected() {
        // GIVEN
        init_tracing();
        let schema = schema_with_broken_check(CrossFailurePolicy::Collect);

        // WHEN
        let report = validate(&schema, &catalog::dataset().unwrap()).unwrap();

        // THEN
        assert!(report.is_partial());
        assert!(!report.is_clean());
        assert_eq!(report.cross_outcomes().len(), 4);
        assert_eq!(report.cross_failures().len(), 1);
        assert!(report.cross_failures()[0].message.contains("Term"));
    }

    #[test]
    fn test_schema_column_absent_from_dataset() {
        init_tracing();
        let mut builder = SchemaBuilder::new();
        builder.add_column("Course Title (CB02)").required().done().unwrap();
        let schema = builder.build().unwrap();

        let result = validate(&schema, &catalog::dataset().unwrap());

        assert!(matches!(result, Err(ValidateError::ColumnMissing { .. })));
    }
}
