//! Common test utilities shared across integration tests.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// NEO fixture in the CSV layout of the JPL small-body database export
pub const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,diameter
a0000433,2000433,433 Eros (A898 PA),433,Eros,,Y,N,16.84
a0001036,2001036,1036 Ganymed (A924 UB),1036,Ganymed,,Y,N,37.675
bK15C00L,3713989,(2015 CL),2015 CL,,,Y,Y,
a0099942,2099942,99942 Apophis (2004 MN4),99942,Apophis,,Y,Y,0.37
";

/// Close-approach fixture in the layout of the JPL close-approach data API
pub const CAD_JSON: &str = r#"{
    "signature": {"version": "1.1", "source": "NASA/JPL SBDB Close Approach Data API"},
    "count": "4",
    "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
    "data": [
        ["2015 CL", "7", "2451544.508863288", "2000-Jan-01 00:12", "0.144929602021186", "0.1449", "0.1449", "12.3977234209389", "12.39", "< 00:01", "21.6"],
        ["433", "659", "2451545.0", "2000-Jan-01 12:00", "0.31", "0.31", "0.31", "5.5", "5.4", "00:01", "10.4"],
        ["1036", "1072", "2459133.9", "2020-Oct-13 09:41", "0.374", "0.374", "0.374", "10.4", "10.3", "00:01", "9.3"],
        ["99942", "199", "2462240.4", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", "5.84", "< 00:01", "19.7"]
    ]
}"#;

/// Write the data fixtures to `data/` under `dir`, where neo looks by default
pub fn write_data(dir: &Path) {
    let data = dir.join("data");
    fs::create_dir_all(&data).expect("Failed to create data directory");
    fs::write(data.join("neos.csv"), NEOS_CSV).expect("Failed to write neos.csv");
    fs::write(data.join("cad.json"), CAD_JSON).expect("Failed to write cad.json");
}

/// Run the neo binary in the specified directory
pub fn run_neo_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_neo"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute neo binary")
}

/// Stdout of a successful run, panicking with stderr otherwise
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "neo failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
