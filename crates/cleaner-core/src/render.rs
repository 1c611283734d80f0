//! Rendering of buckets and versions into the three list fragments
//!
//! The Bazel and GN fragments share one body (Starlark and GN agree on
//! `name = [ "item", ]` syntax) and differ only in how the generated-file
//! notice is commented. The CMake fragment uses `set(NAME item ...)` and
//! carries no version variables.

use std::collections::BTreeMap;

use crate::classify::{Buckets, insert_unique};
use crate::version::Versions;
use crate::Result;

pub const BZL_PATH: &str = "lib/jxl_lists.bzl";
pub const CMAKE_PATH: &str = "lib/jxl_lists.cmake";
pub const GNI_PATH: &str = "lib/lib.gni";

const COPYRIGHT: &[&str] = &[
    "Copyright (c) the JPEG XL Project Authors.",
    "",
    "Use of this source code is governed by a BSD-style",
    "license that can be found in the LICENSE file or at",
    "https://developers.google.com/open-source/licenses/bsd",
];

const NOTICE: &[&str] = &[
    "This file is generated, do not modify it manually.",
    "Run `build-cleaner --update` to regenerate it.",
];

const GNI_PREFIX: &str = "libjxl_";
const CMAKE_PREFIX: &str = "JPEGXL_INTERNAL_";

/// A variable's value in a rendered list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    List(Vec<String>),
    Scalar(String),
}

/// A fully rendered file, relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: &'static str,
    pub text: String,
}

/// Render all three artifacts, in `bzl`, `cmake`, `gni` order.
pub fn render_artifacts(buckets: &Buckets, versions: &Versions) -> Result<Vec<Artifact>> {
    let vars = variables(buckets, versions)?;
    let body = starlark_body(&vars);

    Ok(vec![
        Artifact {
            path: BZL_PATH,
            text: render_bzl(&body),
        },
        Artifact {
            path: CMAKE_PATH,
            text: render_cmake(buckets),
        },
        Artifact {
            path: GNI_PATH,
            text: render_gni(&body),
        },
    ])
}

/// Versions and buckets as one variable map. Names must not collide.
pub fn variables(buckets: &Buckets, versions: &Versions) -> Result<BTreeMap<String, Value>> {
    let mut vars = BTreeMap::new();
    for (name, value) in versions.variables() {
        insert_unique(&mut vars, name.to_string(), Value::Scalar(value.to_string()))?;
    }
    for (name, files) in buckets.iter() {
        insert_unique(&mut vars, name.to_string(), Value::List(files.to_vec()))?;
    }
    Ok(vars)
}

/// The CMake fragment: every bucket as `set(JPEGXL_INTERNAL_<NAME> ...)`.
pub fn render_cmake(buckets: &Buckets) -> String {
    let mut chunks = hash_comment(COPYRIGHT);
    chunks.push(String::new());
    chunks.extend(hash_comment(NOTICE));
    for (name, files) in buckets.iter() {
        let name = format!("{CMAKE_PREFIX}{}", name.to_uppercase());
        chunks.push(format_cmake_var(&name, &Value::List(files.to_vec())));
    }
    chunks.join("\n")
}

/// The Bazel fragment, whose notice is a docstring.
pub fn render_bzl(body: &[String]) -> String {
    let mut chunks = hash_comment(COPYRIGHT);
    chunks.push(String::new());
    chunks.extend(docstring_comment(NOTICE));
    chunks.push(String::new());
    chunks.extend_from_slice(body);
    chunks.join("\n")
}

/// The GN fragment, all comments hash-prefixed.
pub fn render_gni(body: &[String]) -> String {
    let mut chunks = hash_comment(COPYRIGHT);
    chunks.push(String::new());
    chunks.extend(hash_comment(NOTICE));
    chunks.push(String::new());
    chunks.extend_from_slice(body);
    chunks.join("\n")
}

/// One `libjxl_<name> = ...` chunk per variable, in name order.
pub fn starlark_body(vars: &BTreeMap<String, Value>) -> Vec<String> {
    vars.iter()
        .map(|(name, value)| format_gni_var(&format!("{GNI_PREFIX}{name}"), value))
        .collect()
}

/// `name = [\n    "item",\n]\n`, or `name = value\n` for scalars.
pub fn format_gni_var(name: &str, value: &Value) -> String {
    match value {
        Value::List(items) => format!("{name} = [\n{}]\n", format_list(items, "    \"", "\",")),
        Value::Scalar(value) => format!("{name} = {value}\n"),
    }
}

/// `set(NAME\n  item\n)\n`, or `set(NAME value)\n` for scalars.
pub fn format_cmake_var(name: &str, value: &Value) -> String {
    match value {
        Value::List(items) => format!("set({name}\n{})\n", format_list(items, "  ", "")),
        Value::Scalar(value) => format!("set({name} {value})\n"),
    }
}

fn format_list(items: &[String], prefix: &str, suffix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{prefix}{item}{suffix}\n"))
        .collect()
}

fn hash_comment(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("# {line}").trim_end().to_string())
        .collect()
}

fn docstring_comment(lines: &[&str]) -> Vec<String> {
    std::iter::once("\"\"\"")
        .chain(lines.iter().copied())
        .chain(std::iter::once("\"\"\""))
        .map(str::to_string)
        .collect()
}
