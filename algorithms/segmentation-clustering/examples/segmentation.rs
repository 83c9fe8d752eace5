use rand::SeedableRng;
use rand_isaac::Isaac64Rng;
use segmentation_clustering::{compute_elbow, run_kmeans, DEFAULT_MAX_K};
use segmentation_datasets::generate;
use tracing_subscriber::{fmt, EnvFilter};

// Segment a synthetic customer population: cluster it, describe every segment and print the
// elbow curve used to pick the number of segments.
fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut rng = Isaac64Rng::seed_from_u64(42);
    let customers = generate::customers(generate::DEFAULT_POPULATION, &mut rng);

    let n_clusters = 3;
    let result = run_kmeans(&customers, n_clusters, 100, rng.clone()).expect("k-means fitted");
    println!(
        "{} customers, {} clusters, {} iterations, WCSS {:.2}",
        result.n_customers(),
        result.n_clusters(),
        result.iterations(),
        result.wcss()
    );

    for profile in result.profiles(&customers).expect("same population") {
        let age = profile
            .avg_age
            .map_or_else(|| "-".to_string(), |age| age.to_string());
        println!(
            "cluster {}: {:<16} {:>3} customers ({:>5.1}%), income {:>3}k, spending {:>3}, age {:>3}, {} M / {} F",
            profile.index,
            profile.label.to_string(),
            profile.count,
            profile.percentage,
            profile.avg_income,
            profile.avg_spending,
            age,
            profile.male_count,
            profile.female_count
        );
    }

    println!("\nelbow curve");
    for point in compute_elbow(&customers, DEFAULT_MAX_K, rng).expect("elbow computed") {
        println!("k = {:>2}  WCSS = {:>10.2}", point.k, point.wcss);
    }
}
