// Profiler markers, only active on Windows with the `instrument` feature.
#[cfg(all(target_os = "windows", feature = "instrument"))]
use superluminal_perf::*;

pub const E_GEN_COLOR: u32 = 0x6DFF6DFF;
pub const E_CHECK_COLOR: u32 = 0xFFFF6DFF;
pub const E_SEARCH_COLOR: u32 = 0x6D6DFFFF;

#[inline(always)]
#[cfg(all(target_os = "windows", feature = "instrument"))]
pub fn begin(name: &str, color: u32) {
    begin_event_with_color(name, color);
}

#[inline(always)]
#[cfg(not(all(target_os = "windows", feature = "instrument")))]
pub fn begin(_name: &str, _color: u32) {}

#[inline(always)]
#[cfg(all(target_os = "windows", feature = "instrument"))]
pub fn end() {
    end_event();
}

#[inline(always)]
#[cfg(not(all(target_os = "windows", feature = "instrument")))]
pub fn end() {}
