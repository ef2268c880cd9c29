use std::time::Instant;

use uniqid::allocator::IdAllocator;

fn main() {
    let iterations = 10_000_000;

    println!("Starting benchmark with {} iterations...", iterations);

    // 1. Benchmark raw allocation (one atomic add per id)
    let alloc = IdAllocator::new();
    let start_alloc = Instant::now();
    let mut _dummy = 0u64;
    for _ in 0..iterations {
        // Prevent compiler optimization by using the result
        _dummy ^= alloc.allocate().as_u64();
    }
    let duration_alloc = start_alloc.elapsed();

    // 2. Benchmark hex rendering
    let start_hex = Instant::now();
    let mut _len = 0usize;
    for _ in 0..iterations {
        _len += alloc.allocate().to_hex().len();
    }
    let duration_hex = start_hex.elapsed();

    // 3. Token derivation runs 4096 PBKDF2 rounds per call, so only a
    // small sample is practical
    let token_iterations = 1_000;
    let start_token = Instant::now();
    for _ in 0..token_iterations {
        let _ = alloc.allocate().unique_token(1, "bench");
    }
    let duration_token = start_token.elapsed();

    println!("\n--- Results ---");

    println!("allocate():");
    println!("  Total Time: {:?}", duration_alloc);
    println!(
        "  Throughput: {:.2} million ops/sec",
        iterations as f64 / duration_alloc.as_secs_f64() / 1_000_000.0
    );

    println!("allocate() + to_hex():");
    println!("  Total Time: {:?}", duration_hex);
    println!(
        "  Throughput: {:.2} million ops/sec",
        iterations as f64 / duration_hex.as_secs_f64() / 1_000_000.0
    );

    println!("allocate() + unique_token():");
    println!("  Total Time: {:?} for {} tokens", duration_token, token_iterations);
    println!(
        "  Throughput: {:.2} tokens/sec",
        token_iterations as f64 / duration_token.as_secs_f64()
    );

    // Prevent optimization of the loops
    if _dummy == 0 && _len == 0 {
        println!("(Ignored)");
    }
}
