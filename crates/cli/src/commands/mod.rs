//! Single-query commands

use std::io::Write;

use brickset::{LegoSet, LegoSetRepository, PackagingType};
use clap::Subcommand;
use repository::Repository;
use serde::Serialize;

use crate::report::{write_groups, write_themes};

#[derive(Debug, Clone, Subcommand)]
pub enum QueryCommand {
    /// Check whether any set uses a packaging type
    Contains {
        /// Packaging code, e.g. BOX or BLISTER_PACK
        packaging: PackagingType,
    },
    /// List every distinct tag, one per line
    Tags,
    /// Total number of pieces across all sets
    Pieces,
    /// Sets grouped by packaging type
    Packaging,
    /// Total pieces per theme
    Themes,
}

impl QueryCommand {
    pub fn run<R, W>(&self, repo: &LegoSetRepository<R>, json: bool, mut out: W) -> anyhow::Result<()>
    where
        R: Repository<LegoSet>,
        W: Write,
    {
        match self {
            QueryCommand::Contains { packaging } => {
                let found = repo.contains_packaging_type(*packaging);
                if json {
                    write_json(&mut out, &found)?;
                } else {
                    writeln!(out, "{}", found)?;
                }
            }
            QueryCommand::Tags => {
                if json {
                    write_json(&mut out, &repo.all_distinct_tags().collect::<Vec<_>>())?;
                } else {
                    repo.print_all_tags(&mut out)?;
                }
            }
            QueryCommand::Pieces => {
                let total = repo.total_pieces();
                if json {
                    write_json(&mut out, &total)?;
                } else {
                    writeln!(out, "{}", total)?;
                }
            }
            QueryCommand::Packaging => {
                let groups = repo.group_by_packaging_type();
                if json {
                    write_json(&mut out, &groups)?;
                } else {
                    write_groups(&mut out, &groups)?;
                }
            }
            QueryCommand::Themes => {
                let themes = repo.sum_pieces_by_theme();
                if json {
                    write_json(&mut out, &themes)?;
                } else {
                    write_themes(&mut out, &themes)?;
                }
            }
        }
        Ok(())
    }
}

/// Pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repository::InMemoryRepository;

    fn sample() -> LegoSetRepository<InMemoryRepository<LegoSet>> {
        LegoSetRepository::new(InMemoryRepository::new(vec![
            LegoSet::new("6073-1", "Knight's Castle", "Castle", 100, PackagingType::Box)
                .with_tags(["knights"]),
            LegoSet::new("6086-1", "Black Knight's Castle", "Castle", 250, PackagingType::Box)
                .with_tags(["knights", "siege"]),
            LegoSet::new("1462-1", "Galactic Scout", "Space", 50, PackagingType::BlisterPack),
        ]))
    }

    fn run(command: QueryCommand, json: bool) -> String {
        let mut out = Vec::new();
        command.run(&sample(), json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_contains() {
        let found = QueryCommand::Contains {
            packaging: PackagingType::BlisterPack,
        };
        let missing = QueryCommand::Contains {
            packaging: PackagingType::Canister,
        };

        assert_eq!(run(found, false), "true\n");
        assert_eq!(run(missing, true), "false\n");
    }

    #[test]
    fn test_tags() {
        assert_eq!(run(QueryCommand::Tags, false), "knights\nsiege\n");

        let tags: Vec<String> = serde_json::from_str(&run(QueryCommand::Tags, true)).unwrap();
        assert_eq!(tags, ["knights", "siege"]);
    }

    #[test]
    fn test_pieces() {
        assert_eq!(run(QueryCommand::Pieces, false), "400\n");
        assert_eq!(run(QueryCommand::Pieces, true), "400\n");
    }

    #[test]
    fn test_packaging() {
        let text = run(QueryCommand::Packaging, false);
        assert!(text.starts_with("  BOX - Box (2)\n"));
        assert!(text.contains("  BLISTER_PACK - Blister pack (1)\n"));

        let value: serde_json::Value =
            serde_json::from_str(&run(QueryCommand::Packaging, true)).unwrap();
        assert_eq!(value["BLISTER_PACK"][0]["name"], "Galactic Scout");
        assert!(value.get("CANISTER").is_none());
    }

    #[test]
    fn test_themes() {
        assert_eq!(run(QueryCommand::Themes, false), "  Castle: 350\n  Space: 50\n");

        let value: serde_json::Value =
            serde_json::from_str(&run(QueryCommand::Themes, true)).unwrap();
        assert_eq!(value["Castle"], 350);
    }
}
