use super::*;

#[test]
fn owner_slug_lowercases_and_folds_separators() {
    assert_eq!(owner_slug("John Doe"), "john_doe");
    assert_eq!(owner_slug("  Mary-Jane O'Neil "), "mary_jane_o_neil");
    assert_eq!(owner_slug("Zoë"), "zo_");
}

#[test]
fn owner_slug_never_empty() {
    assert_eq!(owner_slug("   "), "resume_owner");
}

#[test]
fn placeholder_matches_site_copy() {
    let file = placeholder("John Doe", "Data Engineer & DevOps Specialist");
    assert_eq!(file.filename, "john_doe_resume.txt");
    assert_eq!(file.body, "John Doe's Resume - Data Engineer & DevOps Specialist");
    assert_eq!(file.content_disposition(), "attachment; filename=\"john_doe_resume.txt\"");
}
