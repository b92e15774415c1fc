use recapd::domain::clean_summary;

#[test]
fn given_markdown_draft_when_cleaned_then_structural_markers_are_removed() {
    let draft = "# Action Items\n- Alice: send report (Friday)";

    assert_eq!(
        clean_summary(draft),
        "Action Items\nAlice: send report (Friday)"
    );
}

#[test]
fn given_ordinary_punctuation_when_cleaned_then_it_is_preserved() {
    let draft = "Hello, world! (Budget: 50%); see item 2.";

    assert_eq!(clean_summary(draft), draft);
}

#[test]
fn given_emphasis_and_quote_markers_when_cleaned_then_content_survives() {
    let draft = "> **Key point**: ship the `beta` build";

    assert_eq!(clean_summary(draft), "Key point: ship the beta build");
}

#[test]
fn given_any_draft_when_cleaned_twice_then_result_is_stable() {
    let drafts = [
        "# Action Items\n- Alice: send report (Friday)",
        "plain text without markup",
        "  \n\n  ",
        "",
        "> quoted\n* starred\n`coded`",
        "inner  spaces   stay",
        "- one\n- two\n- three",
    ];

    for draft in drafts {
        let once = clean_summary(draft);
        let twice = clean_summary(&once);
        assert_eq!(once, twice, "cleaning not idempotent for {:?}", draft);
    }
}

#[test]
fn given_surrounding_whitespace_when_cleaned_then_it_is_trimmed() {
    assert_eq!(clean_summary("  \n  summary text  \n  "), "summary text");
}
