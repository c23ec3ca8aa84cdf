#[cfg(test)]
mod tests {
    use std::io::Write;

    use ol_cli::{commands, render};
    use opslearn_shared::{extract_headings, Article, Paginator};
    use tempfile::NamedTempFile;

    const GUIDE: &str = r#"# Terraform Guide

Intro text.

## Install
### Linux
### macOS
## Usage
```bash
terraform init
```
## Install
"#;

    #[test]
    fn renders_outline_from_markdown_file() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(GUIDE.as_bytes()).expect("write markdown");
        file.flush().expect("flush markdown");

        let content = std::fs::read_to_string(file.path()).expect("read markdown");
        let toc = extract_headings(&content);

        assert_eq!(
            render::toc_tree(&toc),
            "- Terraform Guide\n  - Install\n    - Linux\n    - macOS\n  - Usage\n  - Install\n"
        );
        let flat = render::toc_flat(&toc);
        assert!(flat.starts_with("#terraform-guide  Terraform Guide\n"));
        assert!(flat.contains("    #linux  Linux\n"));
        assert!(flat.ends_with("  #install-2  Install\n"));

        commands::toc::run(file.path(), true).expect("toc command");
    }

    #[test]
    fn toc_command_reports_missing_file() {
        let err = commands::toc::run(std::path::Path::new("/definitely/not/here.md"), false)
            .expect_err("missing file");
        assert!(err.to_string().contains("failed to read markdown file"));
    }

    #[test]
    fn article_line_uses_category_fallback() {
        let article: Article = serde_json::from_str(
            r#"{"id": 12, "title": "GitOps", "published_at": "2024-06-30T12:00:00Z",
                "category": 3, "is_featured": true}"#,
        )
        .expect("decode article");

        assert_eq!(render::article_line(&article, &[]), "   12  2024-06-30  [General] GitOps *");
    }

    #[test]
    fn page_summary_points_at_existing_neighbours() {
        let pager = Paginator::new(6);
        assert_eq!(render::page_summary(&pager, 1, 13), "page 1/3 (13 articles)  next: --page 2");
        assert_eq!(
            render::page_summary(&pager, 2, 13),
            "page 2/3 (13 articles)  prev: --page 1  next: --page 3"
        );
        assert_eq!(render::page_summary(&pager, 3, 13), "page 3/3 (13 articles)  prev: --page 2");
        assert_eq!(render::page_summary(&pager, 1, 4), "page 1/1 (4 articles)");
    }
}
