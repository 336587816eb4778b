use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use hunt_core::responses::MaterialsReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MaterialsArgs;
use crate::output::{ToMarkdown, output};
use crate::workspace::Workspace;

/// Handle `hunt materials`.
///
/// Collects the research note, application folder, matching contact files,
/// and a profile snapshot for one company/role into an export directory, and
/// writes an index of what was found and what was not. Missing sources are
/// recorded, never fatal.
pub fn handle(
    args: &MaterialsArgs,
    workspace: &Workspace,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let slug = slugify(&format!("{} {}", args.company, args.role));
    let output_dir = args.output.as_ref().map_or_else(
        || workspace.exports_dir().join(&slug),
        PathBuf::from,
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("cannot create '{}'", output_dir.display()))?;

    let mut collected = Vec::new();
    let mut missing = Vec::new();
    let company_lower = args.company.to_lowercase();
    let memory = workspace.memory_dir();

    // 1. Company research note.
    let research = memory
        .join("companies")
        .join(format!("{}.md", slugify(&args.company)));
    if research.is_file() {
        copy_into(&research, &output_dir, "company_research.md", &mut collected)?;
    } else {
        missing.push(String::from("Company research (add a research note first)"));
    }

    // 2. Application materials: exact slug directory, else first directory
    //    whose name contains the company.
    let applications = memory.join("applications");
    let app_dir = applications.join(&slug);
    if app_dir.is_dir() {
        copy_dir_files(&app_dir, &output_dir, &mut collected)?;
    } else {
        if let Some(fallback) = find_dir_containing(&applications, &company_lower) {
            copy_dir_files(&fallback, &output_dir, &mut collected)?;
        }
        if collected.is_empty() || collected == [String::from("company_research.md")] {
            missing.push(String::from("Application materials (draft an application first)"));
        }
    }

    // 3. Contact files mentioning the company.
    let contacts = memory.join("contacts");
    if let Ok(read) = fs::read_dir(&contacts) {
        for entry in read.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.path().is_file() && name.to_lowercase().contains(&company_lower) {
                copy_into(
                    &entry.path(),
                    &output_dir,
                    &format!("contact_{name}"),
                    &mut collected,
                )?;
            }
        }
    }

    // 4. Profile snapshot.
    let profile = workspace.profile_path(None);
    if profile.is_file() {
        copy_into(&profile, &output_dir, "my_profile.md", &mut collected)?;
    }

    // 5. Index of the package.
    let index = build_index(&args.role, &args.company, &collected, &missing);
    fs::write(output_dir.join("INDEX.md"), index)
        .with_context(|| format!("cannot write '{}'", output_dir.join("INDEX.md").display()))?;
    collected.push(String::from("INDEX.md"));

    let report = MaterialsReport {
        output: output_dir.display().to_string(),
        collected,
        missing,
    };
    output(&report, flags.format_or(&workspace.config.general.default_format))
}

/// Lower-cased, space-to-hyphen form used to locate file groups.
pub(crate) fn slugify(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

fn copy_into(
    source: &Path,
    output_dir: &Path,
    name: &str,
    collected: &mut Vec<String>,
) -> anyhow::Result<()> {
    fs::copy(source, output_dir.join(name))
        .with_context(|| format!("cannot copy '{}'", source.display()))?;
    collected.push(name.to_string());
    Ok(())
}

fn copy_dir_files(
    dir: &Path,
    output_dir: &Path,
    collected: &mut Vec<String>,
) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir)
        .with_context(|| format!("cannot read '{}'", dir.display()))?
        .flatten()
    {
        if entry.path().is_file() {
            let name = entry.file_name().to_string_lossy().to_string();
            copy_into(&entry.path(), output_dir, &name, collected)?;
        }
    }
    Ok(())
}

fn find_dir_containing(parent: &Path, needle: &str) -> Option<PathBuf> {
    let read = fs::read_dir(parent).ok()?;
    read.flatten()
        .map(|entry| entry.path())
        .find(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .is_some_and(|name| name.to_string_lossy().to_lowercase().contains(needle))
        })
}

fn build_index(role: &str, company: &str, collected: &[String], missing: &[String]) -> String {
    let mut index = format!(
        "# Application Package: {role} @ {company}\n\n**Exported:** {}\n\n## Contents\n\n",
        Local::now().format("%B %d, %Y")
    );
    let mut sorted: Vec<&String> = collected.iter().collect();
    sorted.sort();
    for name in sorted {
        let _ = writeln!(index, "- [{name}](./{name})");
    }
    if !missing.is_empty() {
        index.push_str("\n## Missing\n\n");
        for item in missing {
            let _ = writeln!(index, "- {item}");
        }
    }
    index
}

impl ToMarkdown for MaterialsReport {
    fn to_markdown(&self) -> String {
        let mut out = format!(
            "Exported to: {}\n\nCollected {} files:\n",
            self.output,
            self.collected.len()
        );
        for name in &self.collected {
            let _ = writeln!(out, "  + {name}");
        }
        if !self.missing.is_empty() {
            let _ = writeln!(out, "\nMissing {} items:", self.missing.len());
            for item in &self.missing {
                let _ = writeln!(out, "  - {item}");
            }
        }
        out
    }
}
