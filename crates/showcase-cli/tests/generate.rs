//! End-to-end runs of the application against temporary trees.

use std::fs;
use std::path::Path;

use clap::Parser;
use showcase_cli::{CliArgs, ShowcaseCli};
use tempfile::TempDir;

const TEMPLATE: &str = "# Hi, I build things\n\nSelected projects:";

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Template.md"), TEMPLATE).unwrap();
    fs::create_dir_all(temp.path().join("vault/Projects/archive")).unwrap();
    temp
}

fn note(root: &Path, rel: &str, text: &str) {
    fs::write(root.join("vault").join(rel), text).unwrap();
}

fn run(root: &Path, extra: &[&str]) -> (showcase_content::Report, String) {
    let source = root.join("vault");
    let destination = root.join("profile");
    let mut argv = vec![
        "showcase".to_string(),
        "--source".to_string(),
        source.display().to_string(),
        "--destination".to_string(),
        destination.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));

    let cli = ShowcaseCli::from_resource_dir(root).unwrap();
    let report = cli.run(&CliArgs::parse_from(argv)).unwrap();
    let readme = fs::read_to_string(destination.join("README.md")).unwrap();
    (report, readme)
}

#[test]
fn test_vault_to_readme() {
    let temp = setup();
    note(
        temp.path(),
        "Projects/alpha.md",
        "---\npresentable: true\ngithub: https://github.com/me/alpha\n---\n\
         # Alpha\nprivate notes\n\
         # Presentation\nAlpha parses things.\n## Description\nA parser.\n## Status\nStable\n\
         # Log\n- 2024: started\n",
    );
    note(
        temp.path(),
        "Projects/archive/beta.md",
        "---\nstatus: archived\nPresentable: yes\n---\n# Presentation\nBeta is retired.\n",
    );
    note(
        temp.path(),
        "Projects/gamma.md",
        "# Presentation\nNo frontmatter, never shown.\n",
    );
    note(temp.path(), "Projects/draft.md", "---\ndraft: true\n---\n# Presentation\nHidden\n");

    let (report, readme) = run(temp.path(), &[]);

    assert_eq!(report.section_count, 2);
    assert!(readme.starts_with(&format!("{TEMPLATE}\n\n")));
    assert!(readme.contains(
        "### [alpha](https://github.com/me/alpha)\n\nAlpha parses things.\n#### Description\nA parser.\n#### Status\nStable\n\n---\n\n"
    ));
    assert!(readme.contains("### beta\n\nBeta is retired.\n\n---\n\n"));
    assert!(!readme.contains("never shown"));
    assert!(!readme.contains("Hidden"));
    assert!(!readme.contains("private notes"));
    assert!(!readme.contains("2024: started"));
}

#[test]
fn test_vault_to_readme_description_only() {
    let temp = setup();
    note(
        temp.path(),
        "Projects/alpha.md",
        "---\npresentable: true\n---\n# Presentation\nAlpha parses things.\n## Description\nA parser.\n## Status\nStable\n",
    );

    let (report, readme) = run(temp.path(), &["--description-only"]);

    assert_eq!(report.section_count, 1);
    assert_eq!(readme, format!("{TEMPLATE}\n\n### alpha\n\nA parser.\n\n---\n\n"));
}

#[test]
fn test_vault_with_custom_markers() {
    let temp = setup();
    fs::write(
        temp.path().join("showcase.toml"),
        "[markers]\npresentable_token = \"public\"\nsection = \"Pitch\"\nlink_key = \"repo\"\n\n[output]\ntitle_level = 2\n",
    )
    .unwrap();
    note(
        temp.path(),
        "Projects/delta.md",
        "---\npublic: true\nrepo: https://git.example/delta\n---\n# Pitch\nDelta.\n## More\ntext\n",
    );
    note(
        temp.path(),
        "Projects/epsilon.md",
        "---\npresentable: true\n---\n# Presentation\nIgnored under custom markers.\n",
    );

    let (report, readme) = run(temp.path(), &[]);

    assert_eq!(report.section_count, 1);
    assert_eq!(
        readme,
        format!("{TEMPLATE}\n\n## [delta](https://git.example/delta)\n\nDelta.\n### More\ntext\n\n---\n\n")
    );
}

#[test]
fn test_empty_vault_yields_template_only() {
    let temp = setup();

    let (report, readme) = run(temp.path(), &[]);

    assert_eq!(report.section_count, 0);
    assert_eq!(readme, format!("{TEMPLATE}\n\n"));
}
