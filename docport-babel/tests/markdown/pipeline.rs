//! Output-text tests for full conversions (Markdown → Markdown with preamble)

use crate::common::{fixture, offset_of};
use docport_babel::{FormatError, Pipeline, Tables};

fn rule_rewriter(url: &str) -> String {
    url.replace("../../../docs/user-guide/", "../../")
}

fn root_rewriter(url: &str) -> String {
    url.strip_prefix("docs/").unwrap_or(url).to_string()
}

#[test]
fn rule_page_gets_wrappers_admonition_spans_and_links() {
    let tables = Tables::standard();
    let out = Pipeline::new(&tables)
        .run(&fixture("rule-readme.md"), rule_rewriter)
        .expect("rule page should convert");

    assert!(out.starts_with("---\ntitle: color-no-invalid-hex\nsidebar_label: color-no-invalid-hex\n---\n"));
    assert!(!out.contains("slug:"));

    // Examples
    let invalid = offset_of(&out, "<div class=\"invalid-pattern\">");
    let bad = offset_of(&out, "#00;");
    let valid = offset_of(&out, "<div class=\"valid-pattern\">");
    let good = offset_of(&out, "#000;");
    let status = offset_of(&out, "## Rule status");
    assert!(invalid < bad && bad < valid && valid < good && good < status);
    assert_eq!(out.matches("</div>").count(), 2);
    let first_close = offset_of(&out, "</div>");
    assert!(bad < first_close && first_close < valid);

    // Admonition
    assert!(out.contains(":::note Note"));
    assert!(out.contains("\nLonghand hex colors can be either 6 or 8 digits.\n"));
    assert!(out.lines().any(|line| line == ":::"));
    assert!(!out.contains("**Note**"));

    // Symbols
    assert!(out.contains("<span title=\"Standard\">✅</span>"));
    assert!(out.contains("<span title=\"Autofixable\">🔧</span>"));

    // Links
    assert!(out.contains("(../../options.md#fix)"));
}

#[test]
fn home_page_gets_home_label_and_root_slug() {
    let tables = Tables::standard();
    let converted = Pipeline::new(&tables)
        .convert(&fixture("home-readme.md"), root_rewriter)
        .expect("home page should convert");

    assert_eq!(converted.metadata.sidebar_label, "Home");
    assert_eq!(converted.metadata.slug.as_deref(), Some("/"));
    assert!(converted.text.contains("sidebar_label: Home\n"));
    assert!(converted.text.contains("slug: /\n"));

    // Links inside the converted warning were rewritten first
    assert!(converted.text.contains(":::caution Warning"));
    assert!(converted.text.contains("(migration-guide/to-16.md)"));
    assert!(converted.text.contains("(lib/rules/README.md)"));
    assert_eq!(converted.report.admonitions, 1);
    assert_eq!(converted.report.links, 1);
}

#[test]
fn trigger_followed_by_heading_yields_empty_wrapper() {
    let tables = Tables::standard();
    let out = Pipeline::new(&tables)
        .run(
            "# Rule\n\nThe following pattern is considered a problem:\n\n## Options\n",
            |url| url.to_string(),
        )
        .unwrap();

    let body: Vec<&str> = out
        .lines()
        .skip_while(|line| !line.starts_with("The following"))
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(
        body,
        vec![
            "The following pattern is considered a problem:",
            "<div class=\"invalid-pattern\">",
            "</div>",
            "## Options",
        ]
    );
}

#[test]
fn unknown_callout_stays_a_quote() {
    let tables = Tables::standard();
    let out = Pipeline::new(&tables)
        .run("# Foo\n\n> **Tip** Not converted.\n", |url| url.to_string())
        .unwrap();
    assert!(out.contains("> **Tip** Not converted."));
    assert!(!out.contains(":::"));
}

#[test]
fn document_without_h1_is_rejected() {
    let tables = Tables::standard();
    let result = Pipeline::new(&tables).run(&"Just text.\n".repeat(3), |url| url.to_string());
    assert!(matches!(result, Err(FormatError::MissingTitle)));
}
