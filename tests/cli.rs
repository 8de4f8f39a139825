use std::process::Command;

fn c_bench() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_c_bench"));
    cmd.env_remove("C_BENCH_SEED").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_usage_one_arg() {
    let out = c_bench().arg("10").output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "usage: c_bench [size runs]\n");
}

#[test]
fn test_usage_three_args() {
    let out = c_bench().args(&["10", "2", "3"]).output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "usage: c_bench [size runs]\n");
}

#[test]
fn test_report() {
    let out = c_bench()
        .args(&["1000", "2"])
        .env("C_BENCH_SEED", "11")
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "{}", stdout);
    assert_eq!(lines[0], "Using input size 1000 and averaged over 2 runs.");
    let tails = [
        "\t1000\tUnique Inserts",
        "\t1000\tRepeated Inserts",
        "\t500\tUnique Deletes",
        "\t500\tRepeated Deletes",
        "\t1000\tQueries",
    ];
    for (line, tail) in lines[1..].iter().zip(tails.iter()) {
        assert!(line.ends_with(tail), "{:?}", line);
        let secs = line.split(':').next().unwrap();
        assert_eq!(secs.split('.').nth(1).map(str::len), Some(3), "{:?}", line);
        assert!(secs.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn test_zero_size() {
    let out = c_bench().args(&["0", "1"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Using input size 0 and averaged over 1 runs.\n"));
    assert!(stdout.contains("0.000:\t0\tUnique Deletes"), "{}", stdout);
}

#[test]
fn test_zero_runs_rejected() {
    let out = c_bench().args(&["10", "0"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
