//! Full dataset report - every query run once, in a fixed order

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use brickset::{LegoSet, LegoSetRepository, PackagingType};
use console::style;
use repository::Repository;
use serde::Serialize;

/// Results of every query over one dataset
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub dataset: &'a Path,
    pub generated_at: String,
    pub packaging_type: PackagingType,
    pub contains_packaging_type: bool,
    pub tags: Vec<&'a str>,
    pub total_pieces: u64,
    pub by_packaging_type: BTreeMap<PackagingType, Vec<&'a LegoSet>>,
    pub pieces_by_theme: BTreeMap<&'a str, u64>,
}

impl<'a> Report<'a> {
    /// Run every query against the repository
    pub fn build<R: Repository<LegoSet>>(
        repo: &'a LegoSetRepository<R>,
        dataset: &'a Path,
        packaging_type: PackagingType,
    ) -> Self {
        Self {
            dataset,
            generated_at: chrono::Utc::now().to_rfc3339(),
            packaging_type,
            contains_packaging_type: repo.contains_packaging_type(packaging_type),
            tags: repo.all_distinct_tags().collect(),
            total_pieces: repo.total_pieces(),
            by_packaging_type: repo.group_by_packaging_type(),
            pieces_by_theme: repo.sum_pieces_by_theme(),
        }
    }

    /// Human-readable rendering
    ///
    /// Sections appear in a fixed order: existence check, tags, total
    /// pieces, packaging groups, theme sums.
    pub fn write_text<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "{} {}",
            style(format!("Contains {}:", self.packaging_type)).bold(),
            self.contains_packaging_type
        )?;

        writeln!(out, "{}", style("Tags:").bold())?;
        for tag in &self.tags {
            writeln!(out, "{}", tag)?;
        }

        writeln!(
            out,
            "{} {}",
            style("Total pieces:").bold(),
            self.total_pieces
        )?;

        writeln!(out, "{}", style("By packaging type:").bold())?;
        write_groups(&mut out, &self.by_packaging_type)?;

        writeln!(out, "{}", style("Pieces by theme:").bold())?;
        write_themes(&mut out, &self.pieces_by_theme)?;

        Ok(())
    }
}

/// One header line per packaging type, followed by its sets
pub fn write_groups<W: Write>(
    mut out: W,
    groups: &BTreeMap<PackagingType, Vec<&LegoSet>>,
) -> io::Result<()> {
    for (packaging_type, sets) in groups {
        writeln!(
            out,
            "  {} - {} ({})",
            packaging_type,
            packaging_type.display_name(),
            sets.len()
        )?;
        for set in sets {
            writeln!(out, "    {}", set)?;
        }
    }
    Ok(())
}

pub fn write_themes<W: Write>(mut out: W, themes: &BTreeMap<&str, u64>) -> io::Result<()> {
    for (theme, pieces) in themes {
        writeln!(out, "  {}: {}", theme, pieces)?;
    }
    Ok(())
}
