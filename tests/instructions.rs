use cocktails::instructions::segment_instructions;

#[test]
fn splits_lines_then_sentences() {
    assert_eq!(
        segment_instructions(Some("Shake well. Pour over ice.\nGarnish with lime.")),
        ["Shake well.", "Pour over ice.", "Garnish with lime."]
    );
}

#[test]
fn keeps_punctuation_runs_and_unterminated_text() {
    assert_eq!(
        segment_instructions(Some("Stir!! Is it cold? Serve\r\n\n   \nEnjoy")),
        ["Stir!!", "Is it cold?", "Serve", "Enjoy"]
    );
}

#[test]
fn line_without_terminator_is_one_step() {
    assert_eq!(
        segment_instructions(Some("  Build in a highball glass over ice  ")),
        ["Build in a highball glass over ice"]
    );
}

#[test]
fn empty_input() {
    assert!(segment_instructions(None).is_empty());
    assert!(segment_instructions(Some("")).is_empty());
    assert!(segment_instructions(Some(" \n \n")).is_empty());
}

#[test]
fn line_without_a_sentence_is_kept_whole() {
    assert_eq!(segment_instructions(Some("  ...  ")), ["..."]);
    assert_eq!(
        segment_instructions(Some("Shake.\n!?\nStrain.")),
        ["Shake.", "!?", "Strain."]
    );
}
