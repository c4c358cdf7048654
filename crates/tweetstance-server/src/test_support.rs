//! On-disk resource fixtures shared by the server tests.
//!
//! The fixture bundle is small but complete: a four-term vectorizer, all
//! five classifier artifacts, a six-row dataset, and one portrait image.
//! Every non-NB classifier is rigged to a fixed, distinct winner so route
//! tests can prove which artifact a request consulted.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use tempfile::TempDir;
use tweetstance_core::AppConfig;

const FIXTURE_CSV: &str = "\
sentiment,message,tweetid
1,Climate change is real,1
1,Act on climate now,2
-1,Global warming is a hoax,3
2,New climate report released,4
0,Thoughts about climate,5
1,Warming seas threaten coasts,6
";

pub(crate) fn app_config(resources_dir: &Path) -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        log_level: "info".to_string(),
        resources_dir: resources_dir.to_path_buf(),
    }
}

pub(crate) fn resources_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("create fixture dir");
    write_resources(dir.path());
    dir
}

fn write_resources(dir: &Path) {
    let write = |name: &str, value: &serde_json::Value| {
        fs::write(dir.join(name), value.to_string()).expect("write fixture artifact");
    };

    // Vocabulary columns: climate 0, freezing 1, hoax 2, warming 3.
    write(
        "vectorizer.json",
        &serde_json::json!({
            "vocabulary": { "climate": 0, "freezing": 1, "hoax": 2, "warming": 3 },
            "idf": [1.0, 1.0, 1.0, 1.0],
        }),
    );

    // A real argmax model: freezing/hoax pull Anti, climate/warming pull Pro.
    write(
        "nb.json",
        &serde_json::json!({
            "kind": "multinomial_nb",
            "classes": [-1, 0, 1, 2],
            "class_log_prior": [-1.386, -1.386, -1.386, -1.386],
            "feature_log_prob": [
                [-3.0, -0.5, -0.5, -3.0],
                [-2.0, -2.0, -2.0, -2.0],
                [-0.5, -3.0, -3.0, -0.5],
                [-2.5, -2.5, -2.5, -2.5],
            ],
        }),
    );

    write("model_logistic.json", &rigged_linear([-1.0, 1.0, 0.0, -0.5]));
    write("model_svc.json", &rigged_linear([-1.0, 0.0, 1.0, -0.5]));
    write(
        "svc_poly.json",
        &rigged_kernel(
            serde_json::json!({ "type": "poly", "gamma": 0.5, "coef0": 1.0, "degree": 3 }),
            [-1.0, 0.0, -0.5, 1.0],
        ),
    );
    write(
        "svc_gemma.json",
        &rigged_kernel(
            serde_json::json!({ "type": "rbf", "gamma": 0.5 }),
            [1.0, 0.0, -0.5, -1.0],
        ),
    );

    fs::write(dir.join("train.csv"), FIXTURE_CSV).expect("write fixture dataset");

    fs::create_dir_all(dir.join("img")).expect("create img dir");
    fs::write(
        dir.join("img/makhambi.svg"),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1 1\"/>",
    )
    .expect("write fixture portrait");
}

/// Linear model with zero weights; the intercepts alone pick the winner.
fn rigged_linear(intercept: [f32; 4]) -> serde_json::Value {
    serde_json::json!({
        "kind": "linear",
        "classes": [-1, 0, 1, 2],
        "coef": [
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ],
        "intercept": intercept,
    })
}

/// Kernel SVM with zero dual coefficients; the intercepts alone pick the
/// winner, whatever the kernel computes.
fn rigged_kernel(kernel: serde_json::Value, intercept: [f32; 4]) -> serde_json::Value {
    serde_json::json!({
        "kind": "kernel_svm",
        "classes": [-1, 0, 1, 2],
        "kernel": kernel,
        "support_vectors": [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
        ],
        "dual_coef": [
            [0.0, 0.0],
            [0.0, 0.0],
            [0.0, 0.0],
            [0.0, 0.0],
        ],
        "intercept": intercept,
    })
}
