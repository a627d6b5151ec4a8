//! Mapping Builder CLI
//!
//! 로스터 JSON → 한글 이름 매핑 TypeScript 파일 생성 도구
//! Generate / Retranslate / Audit 서브커맨드

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mapping_builder")]
#[command(about = "Build Korean player-name mapping files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate a mapping file from a roster JSON file
    Generate {
        /// League slug (e.g., "saudi-pro-league")
        #[arg(long)]
        league: String,

        /// Input roster JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output TypeScript mapping file path
        #[arg(long)]
        out: PathBuf,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify mapping file after writing
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Retranslate an existing mapping file in place
    Retranslate {
        /// League slug (e.g., "j1-league")
        #[arg(long)]
        league: String,

        /// Mapping file to rewrite (a .backup sibling is written first)
        #[arg(long)]
        file: PathBuf,

        /// Overwrite curated names as well
        #[arg(long, default_value = "false")]
        force: bool,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify mapping file after rewriting
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Export a translation audit CSV for manual review
    Audit {
        /// League slug (e.g., "eredivisie")
        #[arg(long)]
        league: String,

        /// Mapping file to audit
        #[arg(long)]
        file: PathBuf,

        /// Output CSV file path
        #[arg(long)]
        out: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            league,
            r#in,
            out,
            schema_version,
            verify,
            metadata,
        } => {
            println!("🔨 Generating mapping file...");
            println!("   League: {}", league);
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());
            println!("   Schema: {}", schema_version);

            let pack = roster_core::get_league_pack(&league)?;
            let source = roster_core::JsonFileSource::load(&r#in)?;
            let (meta, stats) =
                mapping_builder::build_mapping_file(pack, &source, &out, &schema_version)?;

            print_stats(&stats);
            print_metadata(&meta);

            if verify {
                verify_mapping_integrity(pack, &out)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Retranslate {
            league,
            file,
            force,
            schema_version,
            verify,
            metadata,
        } => {
            println!("🔨 Retranslating mapping file...");
            println!("   League: {}", league);
            println!("   File:   {}", file.display());
            if force {
                println!("   Mode:   force (curated names will be overwritten)");
            }

            let pack = roster_core::get_league_pack(&league)?;
            let (meta, stats) =
                mapping_builder::retranslate_mapping_file(pack, &file, force, &schema_version)?;

            print_stats(&stats);
            print_metadata(&meta);

            if verify {
                verify_mapping_integrity(pack, &file)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Audit { league, file, out } => {
            println!("🔍 Auditing mapping file...");
            println!("   League: {}", league);
            println!("   File:   {}", file.display());

            let pack = roster_core::get_league_pack(&league)?;
            let rows = mapping_builder::audit_mapping_file(pack, &file, &out)?;

            println!("\n📄 Audit CSV saved to: {} ({} rows)", out.display(), rows);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_stats(stats: &mapping_builder::TranslateStats) {
    println!("\n✅ Translation complete!");
    println!("   Total players:      {}", stats.total);
    println!("   Exact matches:      {}", stats.exact);
    println!("   Structural:         {}", stats.structural);
    println!("   Token substitution: {}", stats.token);
    println!("   Curated (kept):     {}", stats.curated);
    println!("   Unmatched:          {}", stats.unmatched.len());
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &mapping_builder::MappingMetadata) {
    println!("\n✅ Mapping file written!");
    println!("   League:     {}", meta.league);
    println!("   Players:    {}", meta.total_players);
    println!("   Teams:      {}", meta.total_teams);
    println!("   Unresolved: {}", meta.unresolved);
    println!(
        "   Size:       {} bytes ({:.2} KB)",
        meta.output_size,
        meta.output_size as f64 / 1024.0
    );
    println!("   Checksum:   {}", meta.checksum);
    println!("   Created:    {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_mapping_integrity(pack: &roster_core::LeaguePack, path: &std::path::Path) -> Result<()> {
    println!("\n🔍 Verifying mapping file...");
    let is_valid = mapping_builder::verify_mapping_file(pack, path)?;

    if is_valid {
        println!("✅ Mapping verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Mapping verification failed - file does not round-trip!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &PathBuf, meta: &mapping_builder::MappingMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("mapping_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
