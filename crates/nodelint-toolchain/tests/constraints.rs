use nodelint_toolchain::constraints::Constraints;
use nodelint_toolchain::error::ResolveError;
use nodelint_toolchain::parser::ConstraintParser;
use semver::Version;

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[test]
fn two_clauses_parse_like_each_alone() {
    for (a, b) in [(">=0.10.3", "<0.12"), ("^8.x", "<=10.x"), ("~1.3.0-0", ">=v12")] {
        for spec in [format!("{a} {b}"), format!("{a},{b}")] {
            let both = ConstraintParser::parse(&spec).unwrap();
            assert_eq!(both.len(), 2, "{spec}");
            let alone_a = ConstraintParser::parse(a).unwrap();
            let alone_b = ConstraintParser::parse(b).unwrap();
            assert_eq!(both.groups()[0], alone_a.groups()[0], "{spec}");
            assert_eq!(both.groups()[1], alone_b.groups()[0], "{spec}");
        }
    }
}

#[test]
fn each_group_matches_independently() {
    let cs = ConstraintParser::parse(">=0.10.3 <0.12").unwrap();
    assert_eq!(cs.len(), 2);

    let check = v("0.10.4");
    assert!(cs.groups()[0].matches(&check));
    assert!(cs.groups()[1].matches(&check));
}

#[test]
fn groups_are_alternatives_not_a_conjunction() {
    let cs = ConstraintParser::parse(">=0.10.3 <0.12").unwrap();
    // Fails `<0.12` but passes `>=0.10.3`.
    assert!(cs.matches(&v("20.0.0")));
}

#[test]
fn or_group_is_not_split() {
    let cs = ConstraintParser::parse("^8.x || ^10.x").unwrap();
    assert_eq!(cs.len(), 1);

    assert!(!cs.eval([&v("9.0.0")]));
    assert!(cs.eval([&v("8.9.0"), &v("10.2.0")]));
}

#[test]
fn eval_is_existential_over_versions() {
    let cs = ConstraintParser::parse("^8.x || ^10.x").unwrap();
    assert!(cs.eval([&v("9.0.0"), &v("10.2.0")]));
    assert!(cs.eval([&v("8.0.0"), &v("9.0.0")]));
    assert!(!cs.eval([&v("9.0.0"), &v("11.0.0")]));
    assert!(!cs.eval(std::iter::empty::<&Version>()));
}

#[test]
fn prerelease_clauses() {
    let cs = ConstraintParser::parse(">=1.2.3-beta.2 ~1.3.0-0").unwrap();
    assert_eq!(cs.len(), 2);
    assert!(cs.eval([&v("1.2.4")]));
}

#[test]
fn x_wildcard_equals_star() {
    let with_x = ConstraintParser::parse(">=12.x").unwrap();
    let with_star = ConstraintParser::parse(">=12.*").unwrap();
    assert_eq!(with_x, with_star);

    for version in ["12.0.0", "12.9.3", "13.1.0", "11.9.9"] {
        assert_eq!(
            with_x.matches(&v(version)),
            with_star.matches(&v(version)),
            "{version}"
        );
    }
}

#[test]
fn prefixed_clause_after_operator() {
    let cs = ConstraintParser::parse(">=v12.x").unwrap();
    assert_eq!(cs.len(), 1);
    assert!(cs.matches(&v("12.0.0")));
    assert!(!cs.matches(&v("11.0.0")));
}

#[test]
fn malformed_clause_aborts_parse() {
    let err = ConstraintParser::parse(">=12 ^banana").unwrap_err();
    match err {
        ResolveError::MalformedClause { clause, reason } => {
            assert_eq!(clause, "^banana");
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn first_malformed_clause_is_reported() {
    let err = ConstraintParser::parse("^foo ^bar").unwrap_err();
    assert!(err.to_string().contains("^foo"), "got: {err}");
}

#[test]
fn empty_specifier_is_malformed() {
    assert!(matches!(
        ConstraintParser::parse("   "),
        Err(ResolveError::MalformedClause { .. })
    ));
}

#[test]
fn determine_prefers_single_range() {
    let cs = Constraints::determine("v9.x").unwrap();
    assert_eq!(cs.len(), 1);
    assert!(cs.matches(&v("9.0.0")));

    let cs = Constraints::determine("^8.x || ^10.x").unwrap();
    assert_eq!(cs.len(), 1);
    assert!(!cs.matches(&v("9.0.0")));
    assert!(cs.eval([&v("8.9.0"), &v("10.2.0")]));

    // Comma-joined comparators form one range and keep their conjunction.
    let cs = Constraints::determine(">=12.x, <=13.4.x").unwrap();
    assert_eq!(cs.len(), 1);
    assert!(!cs.matches(&v("14.0.0")));

    let cs = Constraints::determine(">= 0.10.3").unwrap();
    assert_eq!(cs.len(), 1);
}

#[test]
fn determine_splits_space_separated_clauses() {
    let cs = Constraints::determine(">=12.x <=13.4.x").unwrap();
    assert_eq!(cs.len(), 2);
    assert_eq!(cs.groups()[0].as_str(), ">=12.*");
    assert_eq!(cs.groups()[1].as_str(), "<=13.4.*");
    assert!(cs.matches(&v("14.0.0")));
    assert!(cs.matches(&v("11.0.0")));
}

#[test]
fn determine_prerelease_clauses_are_alternatives() {
    let cs = Constraints::determine(">=1.2.3-beta.2 ~1.3.0-0").unwrap();
    assert_eq!(cs.len(), 2);
    assert!(cs.matches(&v("1.2.4")));
}

#[test]
fn determine_falls_back_to_clauses() {
    let cs = Constraints::determine(">=12<14").unwrap();
    assert_eq!(cs.len(), 2);
    assert_eq!(cs.groups()[0].as_str(), ">=12");
    assert_eq!(cs.groups()[1].as_str(), "<14");
}

#[test]
fn determine_reports_malformed_clause() {
    assert!(matches!(
        Constraints::determine("banana"),
        Err(ResolveError::MalformedClause { .. })
    ));
}
