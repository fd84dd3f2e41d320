// Token substitution tests against the public API

use rstest::rstest;
use sukashi::template::{canonicalize_template, canonicalize_token, resolve_template, EditorContext};
use sukashi::token::Token;

#[rstest]
#[case(Token::CurrentFileName, "${CurrentFileName}")]
#[case(Token::CurrentDirectoryName, "${CURRENTDIRECTORYNAME}")]
#[case(Token::CurrentProjectName, "${currentProjectName}")]
#[case(Token::CurrentFilePathInProject, "${CurrentFilePathInProject}")]
fn test_each_token_matches_case_insensitively(#[case] token: Token, #[case] spelled: &str) {
    let input = format!("before {} after", spelled);
    let (found, text) = canonicalize_token(&input, token);

    assert!(found);
    assert_eq!(text, format!("before {} after", token.literal()));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(8)]
fn test_all_occurrences_are_normalized(#[case] count: usize) {
    let input = "x${CurrentFileName}".repeat(count);
    let (found, text) = canonicalize_token(&input, Token::CurrentFileName);

    assert_eq!(found, count > 0);
    assert_eq!(text, "x${currentfilename}".repeat(count));
}

#[test]
fn test_repeated_pass_is_idempotent() {
    let (flags1, once) = canonicalize_template("a ${CurrentFileName} b ${CURRENTPROJECTNAME} c");
    let (flags2, twice) = canonicalize_template(&once);

    assert_eq!(once, twice);
    assert_eq!(flags1, flags2);
}

#[test]
fn test_all_four_tokens_detected_together() {
    let (flags, _) = canonicalize_template(
        "${CurrentFileName}/${CurrentDirectoryName}/${CurrentProjectName}/${CurrentFilePathInProject}",
    );

    for token in Token::ALL {
        assert!(flags.get(token), "Failed for {:?}", token);
    }
    assert!(flags.any());
}

#[test]
fn test_canonical_format_resolves_with_context_values() {
    let (_, format) = canonicalize_template("Editing ${CurrentFileName} (${CurrentFilePathInProject})");

    let mut context = EditorContext::new();
    context.set_file_name("mod.rs");
    context.set_file_path_in_project("src/watermark/mod.rs");

    assert_eq!(
        resolve_template(&format, &context),
        "Editing mod.rs (src/watermark/mod.rs)"
    );
}
