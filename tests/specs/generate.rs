//! Behavioral specs for `modgen generate`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tempfile::TempDir;

use crate::prelude::*;

const GZIP_MODULE: &str = "# Module file for gzip/1.4, generated by modgen
#%Module

proc ModulesHelp { } {
    puts stderr {   gzip (GNU zip) is a popular data compression program as a replacement for compress - Homepage: http://www.gzip.org/
}
}

module-whatis {gzip (GNU zip) is a popular data compression program as a replacement for compress - Homepage: http://www.gzip.org/}

set root    /tmp

conflict    gzip

prepend-path\tMANPATH\t\t$root/share/man
prepend-path\tPATH\t\t$root/bin

setenv\tEBROOTGZIP\t\t$root
setenv\tEBVERSIONGZIP\t\t1.4
";

/// An empty directory that stops config discovery.
fn isolated_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

#[test]
fn generate_stdout_prints_module() {
    let cwd = isolated_dir();
    modgen_cmd()
        .current_dir(cwd.path())
        .arg("generate")
        .arg(fixture("gzip/gzip-1.4.toml"))
        .arg("--stdout")
        .assert()
        .success()
        .stdout(GZIP_MODULE);
}

#[test]
fn generate_writes_into_module_tree() {
    let cwd = isolated_dir();
    let prefix = TempDir::new().unwrap();
    let config = cwd.path().join("modgen.toml");
    std::fs::write(
        &config,
        format!("version = 1\ninstall_prefix = \"{}\"\n", prefix.path().display()),
    )
    .unwrap();

    let expected = prefix.path().join("modules/all/zlib/1.2.8");
    modgen_cmd()
        .current_dir(cwd.path())
        .arg("generate")
        .arg(fixture("site/units/zlib-1.2.8.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains(expected.display().to_string()));

    let written = std::fs::read_to_string(&expected).unwrap();
    let root = prefix.path().join("software/zlib/1.2.8");
    assert!(written.contains(&format!("set root    {}\n", root.display())));
    assert!(written.contains("prepend-path\tLD_LIBRARY_PATH\t\t$root/lib\n"));
    assert!(written.contains("conflict    zlib\n"));
}

#[test]
fn generate_uses_discovered_config() {
    modgen_cmd()
        .current_dir(fixture("site/units"))
        .args(["generate", "zlib-1.2.8.toml", "--stdout", "--no-header"])
        .assert()
        .success()
        .stdout(
            predicates::str::starts_with("#%Module\n")
                .and(predicates::str::contains(
                    "set root    /apps/site/software/zlib/1.2.8\n",
                ))
                .and(predicates::str::contains("conflict").not()),
        );
}

#[test]
fn generate_installdir_flag_overrides_unit() {
    let cwd = isolated_dir();
    modgen_cmd()
        .current_dir(cwd.path())
        .arg("generate")
        .arg(fixture("gzip/gzip-1.4.toml"))
        .args(["--installdir", "/scratch/gzip", "--no-conflict", "--stdout"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("set root    /scratch/gzip\n")
                .and(predicates::str::contains("conflict").not()),
        );
}

#[test]
fn generate_output_flag_writes_file() {
    let cwd = isolated_dir();
    let out = cwd.path().join("out/gzip");
    modgen_cmd()
        .current_dir(cwd.path())
        .arg("generate")
        .arg(fixture("gzip/gzip-1.4.toml"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), GZIP_MODULE);
}

#[test]
fn generate_missing_unit_fails() {
    let cwd = isolated_dir();
    modgen_cmd()
        .current_dir(cwd.path())
        .args(["generate", "missing.toml", "--stdout"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to load unit missing.toml"));
}

#[test]
fn generate_rejects_unknown_config_key() {
    let cwd = isolated_dir();
    std::fs::write(cwd.path().join("modgen.toml"), "version = 1\nbogus = 1\n").unwrap();
    modgen_cmd()
        .current_dir(cwd.path())
        .arg("generate")
        .arg(fixture("gzip/gzip-1.4.toml"))
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown field"));
}

#[test]
fn generate_rejects_unit_name_outside_tree() {
    let cwd = isolated_dir();
    let unit = cwd.path().join("escape.toml");
    std::fs::write(
        &unit,
        "name = \"..\"\nversion = \"1.0\"\ndescription = \"x\"\nhomepage = \"http://x/\"\n",
    )
    .unwrap();

    modgen_cmd()
        .current_dir(cwd.path())
        .arg("generate")
        .arg(&unit)
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid argument"));
    assert!(!cwd.path().join("modules").exists());
}
