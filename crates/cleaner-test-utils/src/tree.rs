//! Writers for the configuration documents the version reader parses.

use crate::GitFixture;

/// Stage `lib/CMakeLists.txt` declaring the given library version.
pub fn add_lib_cmake(fixture: &GitFixture, major: u32, minor: u32, patch: u32) {
    let text = format!(
        "cmake_minimum_required(VERSION 3.10)\n\
         set(JPEGXL_MAJOR_VERSION {major})\n\
         set(JPEGXL_MINOR_VERSION {minor})\n\
         set(JPEGXL_PATCH_VERSION {patch})\n"
    );
    fixture.add_file("lib/CMakeLists.txt", &text);
}

/// Stage the top-level `CMakeLists.txt` declaring the libjpeg soversion.
pub fn add_root_cmake(fixture: &GitFixture, soversion: &str) {
    let text = format!(
        "project(LIBJXL LANGUAGES C CXX)\n\
         set(JPEGLI_LIBJPEG_LIBRARY_SOVERSION \"{soversion}\" CACHE STRING \"\")\n"
    );
    fixture.add_file("CMakeLists.txt", &text);
}

/// Stage both CMake files with a fixed, known version (0.11.1, soversion 8).
pub fn add_default_cmake(fixture: &GitFixture) {
    add_lib_cmake(fixture, 0, 11, 1);
    add_root_cmake(fixture, "8");
}
