//! End-to-end rewrite flows.
//!
//! Each test builds a small library tree, runs the binary against a JSON
//! config, and checks the rewritten output tree. The scenarios cover every
//! relation branch (down, up, unrelated), both policy flags, the
//! already-valid tie-break, dry runs, and idempotence.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::json;

/// Unrelated target with root-level auto-inclusion: addressed from the
/// library root with no `../` prefix.
#[test]
fn test_unrelated_target_with_root_include() {
    let env = TestEnv::new();
    env.make_split_library();
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["include"],
        "out": {"dir": "out"},
        "options": {"root_include": true}
    }));

    env.command()
        .arg(config)
        .assert()
        .success()
        .stderr(predicate::str::contains("Changed 1 files"));

    assert_eq!(
        env.read_file("out/src/a/foo.cpp"),
        "#include \"include/bar.h\"\nint main() {}\n"
    );
    // The original library is never modified.
    assert_eq!(
        env.read_file("lib/src/a/foo.cpp"),
        "#include <bar.h>\nint main() {}\n"
    );
}

/// Unrelated target without root inclusion: one `../` per directory the
/// includer sits below the library root.
#[test]
fn test_unrelated_target_without_root_include() {
    let env = TestEnv::new();
    env.make_split_library();
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["include"],
        "out": {"dir": "out"},
        "options": {"root_include": false}
    }));

    env.command().arg(config).assert().success();

    assert_eq!(
        env.read_file("out/src/a/foo.cpp"),
        "#include \"../../include/bar.h\"\nint main() {}\n"
    );
}

/// Target below the includer's directory: plain subpath, no `../`.
#[test]
fn test_target_in_subdirectory() {
    let env = TestEnv::new();
    env.write_file("lib/src/foo.cpp", "#include <bar.h>\n");
    env.write_file("lib/src/sub/bar.h", "int x;\n");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["src/sub"],
        "out": {"dir": "out"}
    }));

    env.command().arg(config).assert().success();

    assert_eq!(env.read_file("out/src/foo.cpp"), "#include \"sub/bar.h\"\n");
}

/// Includer below the target's directory: exactly one `../` per hop.
#[test]
fn test_target_above_includer() {
    let env = TestEnv::new();
    env.write_file("lib/src/sub/foo.cpp", "#include <bar.h>\n");
    env.write_file("lib/src/bar.h", "int x;\n");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["src"],
        "out": {"dir": "out"}
    }));

    env.command().arg(config).assert().success();

    assert_eq!(
        env.read_file("out/src/sub/foo.cpp"),
        "#include \"../bar.h\"\n"
    );
}

/// Same-directory target with include_same_dir disabled: routed through
/// the parent folder to dodge `-I` ambiguity. The stale `../` token is
/// what forces resolution; a bare `bar.h` would already be valid.
#[test]
fn test_same_directory_disambiguation() {
    let env = TestEnv::new();
    env.write_file("lib/src/foo.cpp", "#include \"../bar.h\"\n");
    env.write_file("lib/src/bar.h", "int x;\n");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["src"],
        "out": {"dir": "out"},
        "options": {"include_same_dir": false}
    }));

    env.command().arg(config).assert().success();

    assert_eq!(
        env.read_file("out/src/foo.cpp"),
        "#include \"../src/bar.h\"\n"
    );
}

/// An include that already resolves relative to its file is left
/// byte-identical and the file is reported unchanged.
#[test]
fn test_already_valid_include_is_untouched() {
    let env = TestEnv::new();
    env.write_file("lib/src/foo.cpp", "#include \"../inc/bar.h\"\n");
    env.write_file("lib/inc/bar.h", "int x;\n");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["inc"],
        "out": {"dir": "out"}
    }));

    env.command()
        .arg(config)
        .assert()
        .success()
        .stderr(predicate::str::contains("Changed 0 files"));

    assert_eq!(
        env.read_file("out/src/foo.cpp"),
        "#include \"../inc/bar.h\"\n"
    );
}

/// Tokens found in no search root are passed through unchanged; system
/// includes survive untouched next to rewritten local ones.
#[test]
fn test_unresolved_includes_pass_through() {
    let env = TestEnv::new();
    env.write_file(
        "lib/src/a/foo.cpp",
        "#include <stdint.h>\n#include <bar.h>\n",
    );
    env.write_file("lib/include/bar.h", "int x;\n");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["include"],
        "out": {"dir": "out"}
    }));

    env.command().arg(config).assert().success();

    assert_eq!(
        env.read_file("out/src/a/foo.cpp"),
        "#include <stdint.h>\n#include \"include/bar.h\"\n"
    );
}

/// Running the tool over its own output produces zero further changes.
#[test]
fn test_rewrite_is_idempotent() {
    let env = TestEnv::new();
    env.make_split_library();
    let first = env.write_file(
        "first.json",
        &json!({
            "lib_path": "lib",
            "include_paths": ["include"],
            "out": {"dir": "out"},
            "options": {"root_include": false}
        })
        .to_string(),
    );

    env.command().arg(&first).assert().success();
    let rewritten = env.read_file("out/src/a/foo.cpp");

    // Feed the rewritten tree back in as the library.
    let second = env.write_file(
        "second.json",
        &json!({
            "lib_path": "out",
            "include_paths": ["include"],
            "out": {"dir": "out2"},
            "options": {"root_include": false}
        })
        .to_string(),
    );

    env.command()
        .arg(&second)
        .assert()
        .success()
        .stderr(predicate::str::contains("Changed 0 files"));
    assert_eq!(env.read_file("out2/src/a/foo.cpp"), rewritten);
}

/// Dry runs report changes without creating the output directory or
/// touching the library.
#[test]
fn test_dry_run_reports_without_writing() {
    let env = TestEnv::new();
    env.make_split_library();
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["include"],
        "out": {"dir": "out"}
    }));

    env.command()
        .arg(config)
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("Changed 1 files"));

    assert!(!env.exists("out"));
    assert_eq!(
        env.read_file("lib/src/a/foo.cpp"),
        "#include <bar.h>\nint main() {}\n"
    );
}

/// Overwrite mode replaces a stale output tree wholesale.
#[test]
fn test_overwrite_replaces_existing_output() {
    let env = TestEnv::new();
    env.make_split_library();
    env.write_file("out/stale.txt", "old");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["include"],
        "out": {"dir": "out", "overwrite": true}
    }));

    env.command().arg(config).assert().success();

    assert!(!env.exists("out/stale.txt"));
    assert!(env.exists("out/src/a/foo.cpp"));
}

/// Headers are rewritten too, and the first matching search root wins.
#[test]
fn test_search_root_order_and_header_rewrite() {
    let env = TestEnv::new();
    env.write_file("lib/src/api.h", "#include <common.h>\n");
    env.write_file("lib/first/common.h", "int a;\n");
    env.write_file("lib/second/common.h", "int b;\n");
    let config = env.write_config(&json!({
        "lib_path": "lib",
        "include_paths": ["first", "second"],
        "out": {"dir": "out"}
    }));

    env.command().arg(config).assert().success();

    assert_eq!(
        env.read_file("out/src/api.h"),
        "#include \"first/common.h\"\n"
    );
}
