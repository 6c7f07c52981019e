//! Lays out a JSON job file and prints the resulting sheets.
//!
//! ```text
//! RUST_LOG=label_sheet=debug cargo run --example layout-job -- job.json
//! ```

use label_sheet::render::{render_layout, FileNaming, GeometryJsonRenderer};
use label_sheet::LayoutJob;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const SAMPLE_JOB: &str = r#"{
    "sheet": { "width": 600, "height": 300, "margin": 5, "gap": 2 },
    "labels": [
        {
            "name": "pump tags",
            "width": 60, "height": 20, "quantity": 12,
            "hole_count": 2, "hole_diameter": 3,
            "lines": [
                { "text": "PUMP P-101", "height": 6 },
                { "text": "COOLING WATER SUPPLY", "height": 4, "spacing_top": "auto" }
            ]
        },
        {
            "width": 120, "height": 40, "quantity": 2,
            "text_colour": "White", "background": "Red", "thickness": 1.6,
            "lines": [{ "text": "FIRE ALARM PANEL", "height": 10 }]
        },
        {
            "name": "banner",
            "width": 700, "height": 50,
            "lines": [{ "text": "SITE ENTRANCE", "height": 30 }]
        }
    ]
}"#;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let job = match std::env::args().nth(1) {
        Some(path) => {
            let file = std::fs::File::open(&path).expect("can open job file");
            LayoutJob::from_reader(std::io::BufReader::new(file)).expect("job file is valid")
        }
        None => LayoutJob::from_json_str(SAMPLE_JOB).expect("sample job is valid"),
    };

    let result = job.run().expect("can lay out job");

    let summary = result.summary();
    println!(
        "{} labels on {} sheets",
        summary.total_labels, summary.total_sheets
    );
    for group in result.groups() {
        println!("{}", group.key);
        for sheet in &group.sheets {
            println!("  page {:02}: {} labels", sheet.page, sheet.len());
        }
    }
    for warning in result.warnings() {
        println!(
            "warning: {} ({}x{}) does not fit the usable {}x{}",
            warning.name.as_deref().unwrap_or("unnamed"),
            warning.size.width,
            warning.size.height,
            warning.usable.width,
            warning.usable.height,
        );
    }

    let files = render_layout(
        &result,
        &mut GeometryJsonRenderer::default(),
        &FileNaming::with_prefix("MLA "),
    )
    .expect("can render sheets");
    for file in files {
        println!("{} ({} bytes)", file.name, file.contents.len());
    }
}
