//! Demonstrates smoothing a noisy range scan with scan-smooth
//!
//! Shows the effect of radius and sigma on a synthetic sweep, and runs the
//! filter node over a short queue of frames.

use std::collections::VecDeque;

use heapless::Vec as HVec;
use scan_smooth::{Config, FilterNode, ScanFrame, ScanMetadata, ScanSmoother};

const SAMPLES: usize = 16;

fn main() {
    println!("=== scan-smooth Examples ===\n");

    // Wall at 2m with measurement noise and one spurious spike
    let raw = [
        2.00_f32, 2.04, 1.97, 2.02, 1.99, 2.05, 1.96, 3.40, 2.01, 1.98, 2.03, 2.00, 1.97, 2.02,
        1.99, 2.01,
    ];

    // Example 1: stock node parameters
    println!("1. Stock parameters (radius=5, sigma=0.01)");
    print_pass(&raw, Config::default());

    // Example 2: wider spread
    println!("2. Wider spread (radius=3, sigma=2.0)");
    print_pass(&raw, Config::new(3, 2.0));

    // Example 3: wide window
    println!("3. Wide window (radius=8, sigma=4.0)");
    print_pass(&raw, Config::new(8, 4.0));

    // Example 4: invalid configuration
    println!("4. Invalid configuration (sigma=0.0)");
    match ScanSmoother::new(Config::new(3, 0.0)) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   rejected: {}", e),
    }
    println!();

    // Example 5: filter node over queued frames
    println!("5. Filter node");
    let source: VecDeque<ScanFrame<f32, SAMPLES>> = (0..3)
        .map(|i| {
            let metadata = ScanMetadata {
                stamp_ns: i * 100_000_000,
                angle_increment: 0.0175,
                ..Default::default()
            };
            ScanFrame::new(metadata, HVec::from_slice(&raw).expect("Frame capacity"))
        })
        .collect();

    let mut node =
        FilterNode::<f32, SAMPLES, _, _>::new(Config::new(3, 2.0), source, Vec::new())
            .expect("Valid config");
    let published = node.spin().expect("In-memory sink");
    println!("   published {} frames", published);

    let (_, sink) = node.into_parts();
    for frame in &sink {
        println!(
            "   stamp={:>10} ns  spike {:.3} -> {:.3}",
            frame.metadata.stamp_ns, raw[7], frame.ranges[7]
        );
    }
}

fn print_pass(raw: &[f32], config: Config) {
    let smoother = ScanSmoother::new(config).expect("Valid config");
    let smoothed = smoother.smooth(raw);

    println!("   Input → Output");
    for (r, s) in raw.iter().zip(&smoothed) {
        println!("   {:.3} → {:.3}", r, s);
    }
    println!();
}
