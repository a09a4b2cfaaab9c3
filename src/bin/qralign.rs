use clap::{Parser, Subcommand};
use qr_alignment::config::{default_first_version, default_last_version};
use qr_alignment::emit::{TableStyle, render_tables};
use qr_alignment::tools::{audit, save_layout_png, tables_for_range, write_table_file};
use qr_alignment::{AlignmentCalculator, Version};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qralign", version, about = "QR alignment pattern table tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit alignment tables as source initializer data
    Table {
        #[arg(long)]
        from: Option<Version>,
        #[arg(long)]
        to: Option<Version>,
        #[arg(long, default_value_t = TableStyle::CSharp)]
        style: TableStyle,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the geometry and allowed positions of one version
    Coords {
        #[arg(id = "symbol-version", value_name = "VERSION")]
        version: Version,
    },
    /// Check coordinate properties and compare against the published table
    Check {
        #[arg(long)]
        from: Option<Version>,
        #[arg(long)]
        to: Option<Version>,
    },
    /// Write an image of the function pattern layout
    Preview {
        #[arg(id = "symbol-version", value_name = "VERSION")]
        version: Version,
        #[arg(long, default_value_t = 8)]
        scale: u32,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Table {
            from,
            to,
            style,
            output,
        } => table_cmd(from, to, style, output.as_deref()),
        Command::Coords { version } => coords_cmd(version),
        Command::Check { from, to } => check_cmd(from, to),
        Command::Preview {
            version,
            scale,
            output,
        } => preview_cmd(version, scale, &output),
    }
}

fn resolve_range(from: Option<Version>, to: Option<Version>) -> Option<(Version, Version)> {
    let from = from.unwrap_or_else(default_first_version);
    let to = to.unwrap_or_else(default_last_version);
    if from > to {
        eprintln!("Empty version range: {} > {}", from, to);
        return None;
    }
    Some((from, to))
}

fn table_cmd(
    from: Option<Version>,
    to: Option<Version>,
    style: TableStyle,
    output: Option<&Path>,
) -> ExitCode {
    let Some((from, to)) = resolve_range(from, to) else {
        return ExitCode::FAILURE;
    };
    if from == Version::MIN {
        eprintln!("Warning: version 1 has no alignment patterns; its table should not be consumed");
    }

    match output {
        Some(path) => match write_table_file(path, from, to, style) {
            Ok(()) => {
                eprintln!("Wrote versions {}-{} to {}", from, to, path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Failed to write {}: {}", path.display(), err);
                ExitCode::FAILURE
            }
        },
        None => {
            print!("{}", render_tables(&tables_for_range(from, to), style));
            ExitCode::SUCCESS
        }
    }
}

fn coords_cmd(version: Version) -> ExitCode {
    let coords = AlignmentCalculator::axis_coordinates(version);
    let positions = AlignmentCalculator::allowed_positions(version);

    println!("Version: {} ({}x{} modules)", version, version.size(), version.size());
    println!(
        "Divisions: {}  step: {}",
        AlignmentCalculator::axis_divisions(version),
        AlignmentCalculator::step(version)
    );
    println!("Axis coordinates: {:?}", coords);
    println!("Allowed positions ({}):", positions.len());
    for pos in &positions {
        println!("  {}", pos);
    }
    if !version.has_alignment_patterns() {
        println!("Note: the standard places no alignment pattern in version 1");
    }
    ExitCode::SUCCESS
}

fn check_cmd(from: Option<Version>, to: Option<Version>) -> ExitCode {
    let Some((from, to)) = resolve_range(from, to) else {
        return ExitCode::FAILURE;
    };

    let results = audit(from, to);
    let mut failed = 0usize;
    let mut deviating = 0usize;
    for result in &results {
        if result.passed() {
            println!(
                "OK: v{} step={} coords={:?} positions={}",
                result.version,
                result.step,
                result.coords,
                result.positions.len()
            );
        } else {
            failed += 1;
            println!("FAIL: v{}", result.version);
            for failure in &result.failures {
                println!("  {}", failure);
            }
        }
        if let Some(dev) = &result.deviation {
            deviating += 1;
            println!(
                "  deviates from published table: computed {:?}, published {:?}",
                dev.computed, dev.expected
            );
        }
    }

    println!(
        "\nResult: {}/{} passed, {} deviate from the published table",
        results.len() - failed,
        results.len(),
        deviating
    );
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn preview_cmd(version: Version, scale: u32, output: &Path) -> ExitCode {
    match save_layout_png(version, scale, output) {
        Ok(()) => {
            println!("Wrote v{} layout to {}", version, output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to write {}: {}", output.display(), err);
            ExitCode::FAILURE
        }
    }
}
