// Example runner for the `geometry_decoder` library.
// It decodes a few synthetic shapes and one preset, then prints the reports.
// Set `RUST_LOG=geometry_decoder=debug` to see the measured descriptors.

use geometry_decoder::{DecodeRequest, DecoderConfig, ParallelDecoder, PixelGrid, Sample};
use tracing_subscriber::EnvFilter;

fn shape(width: u32, height: u32, dark: impl Fn(i64, i64) -> bool) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        if dark(x as i64, y as i64) { Sample::BLACK } else { Sample::WHITE }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Geometry Decoder - Example Runner");

    let requests = vec![
        ("disk", DecodeRequest::Grid(shape(100, 100, |x, y| (x - 50).pow(2) + (y - 50).pow(2) <= 900))),
        ("strip", DecodeRequest::Grid(PixelGrid::filled(100, 20, Sample::BLACK))),
        ("ring", DecodeRequest::Grid(shape(200, 200, |x, y| {
            (58 * 58..=62 * 62).contains(&((x - 100).pow(2) + (y - 100).pow(2)))
        }))),
        ("cross", DecodeRequest::Grid(shape(100, 100, |x, y| {
            ((10..90).contains(&x) && (45..55).contains(&y)) || ((45..55).contains(&x) && (10..90).contains(&y))
        }))),
        ("blank", DecodeRequest::Grid(PixelGrid::filled(64, 64, Sample::WHITE))),
        ("preset", DecodeRequest::Preset("flower_of_life".to_string())),
    ];

    let decoder = ParallelDecoder::new(DecoderConfig::default());
    let (labels, requests): (Vec<_>, Vec<_>) = requests.into_iter().unzip();
    let results = decoder.decode_batch(requests).await;

    for (label, result) in labels.into_iter().zip(results) {
        match result {
            Ok(report) => {
                let symbolic = report.symbolic();
                println!("[{label}] {}: {}", report.name(), report.description());
                println!("    law:       {}", symbolic.physics_law);
                println!("    operator:  {}", symbolic.operator);
                println!("    equation:  {}", symbolic.equation);
                println!("    check:     {}", symbolic.verification);
            }
            Err(err) if err.is_insufficient_features() => println!("[{label}] {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
