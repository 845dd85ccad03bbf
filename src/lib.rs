use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize, Deserializer};
use std::collections::BTreeMap;
use thiserror::Error;

// --- LOGGING ---
#[cfg(target_arch = "wasm32")]
fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_s: &str) {}
macro_rules! console_log {
    ($($t:tt)*) => (log(&format!($($t)*)))
}


// --- CONSTANTS ---

/// Metres per foot. Shared by the cut planner and the measure tool.
pub const FOOT_IN_M: f64 = 0.3048;
const CM_PER_M: f64 = 100.0;
const CM_IN_M: f64 = 0.01;

/// Inclusion tolerance at segment boundaries, in mark-spacing units.
const BOUNDARY_EPSILON: f64 = 1e-4;
/// Absorbs float noise before truncating to whole centimetres.
const TRUNCATION_SLACK_CM: f64 = 1e-6;

const MAX_SEGMENT_LENGTH_M: f64 = 10_000.0;
const MAX_QUANTITY: u32 = 100;
const NUDGE_CM: f64 = 0.2;
const DEFAULT_FOOT_MARK_STEP: i64 = 2;
/// 2^53: larger step counts are no longer exact in f64.
const MAX_EXACT_STEP: f64 = 9_007_199_254_740_992.0;

// --- TYPES ---

#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CableUnit {
    Meter,
    #[default]
    Foot,
}

impl CableUnit {
    pub fn label(self) -> &'static str {
        match self {
            CableUnit::Meter => "m",
            CableUnit::Foot => "ft",
        }
    }

    fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "metre" | "meters" | "metres" => CableUnit::Meter,
            _ => CableUnit::Foot,
        }
    }

    /// Physical length of one unit of mark difference.
    fn unit_length(self) -> f64 {
        match self {
            CableUnit::Meter => 1.0,
            CableUnit::Foot => FOOT_IN_M,
        }
    }
}

#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Direction::Descending,
            _ => Direction::Ascending,
        }
    }
}

/// Display granularity for edge offsets.
#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OffsetRounding {
    #[default]
    Tenth,
    Whole,
}

impl OffsetRounding {
    pub fn format_cm(self, cm: f64) -> String {
        let cm = clamp_non_negative(cm);
        match self {
            OffsetRounding::Tenth => format_tenth(cm),
            OffsetRounding::Whole => format!("{:.0}", (cm + TRUNCATION_SLACK_CM).trunc()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SegmentStatus { Pending, Current, Completed }

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    #[error("segment {index} cannot be cut, segment {current} is next")]
    OutOfRangeCommit { index: u32, current: u32 },

    #[error("all {quantity} segments are already cut")]
    Finished { quantity: u32 },
}

/// Missing or non-numeric fields read as zero; unit and direction fall back
/// to foot and ascending.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, deserialize_with = "loose_f64")]
    pub segment_length: f64,    // m
    #[serde(default, deserialize_with = "loose_quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "loose_f64")]
    pub anchor_offset: f64,     // m, from start of first pending segment
    #[serde(default, deserialize_with = "loose_i64")]
    pub anchor_mark_value: i64,
    #[serde(default, deserialize_with = "loose_unit")]
    pub unit: CableUnit,
    #[serde(default, deserialize_with = "loose_direction")]
    pub direction: Direction,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            segment_length: 100.0,
            quantity: 10,
            anchor_offset: 0.0,
            anchor_mark_value: 54321,
            unit: CableUnit::Foot,
            direction: Direction::Ascending,
        }
    }
}

/// The cut form exactly as typed. Offsets are in centimetres here.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfiguration {
    pub segment_length: String,
    pub quantity: String,
    pub anchor_offset_cm: String,
    pub anchor_mark_value: String,
    pub unit: String,
    pub direction: String,
}

impl Configuration {
    /// Normalises form input. Anything unparseable becomes zero.
    pub fn from_raw(raw: &RawConfiguration) -> Self {
        Self {
            segment_length: parse_lenient_f64(&raw.segment_length),
            quantity: clamp_quantity(parse_lenient_i64(&raw.quantity)),
            anchor_offset: parse_lenient_f64(&raw.anchor_offset_cm) / CM_PER_M,
            anchor_mark_value: parse_lenient_i64(&raw.anchor_mark_value),
            unit: CableUnit::parse(&raw.unit),
            direction: Direction::parse(&raw.direction),
        }
        .sanitized()
    }

    fn sanitized(mut self) -> Self {
        self.segment_length = finite_or_zero(self.segment_length).clamp(0.0, MAX_SEGMENT_LENGTH_M);
        self.quantity = self.quantity.min(MAX_QUANTITY);
        self.anchor_offset = finite_or_zero(self.anchor_offset);
        self
    }

    pub fn anchor(&self) -> Anchor {
        Anchor { offset: self.anchor_offset, mark: self.anchor_mark_value }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanOptions {
    pub rounding: OffsetRounding,
    pub foot_mark_step: i64, // 1 or 2
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { rounding: OffsetRounding::Tenth, foot_mark_step: DEFAULT_FOOT_MARK_STEP }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SegmentResult {
    pub index: u32, // 1-based
    pub has_marks: bool,
    pub first_mark: Option<i64>,
    pub last_mark: Option<i64>,
    pub start_offset_cm: f64,
    pub end_offset_cm: f64,
}

impl SegmentResult {
    fn without_marks(index: u32) -> Self {
        Self {
            index,
            has_marks: false,
            first_mark: None,
            last_mark: None,
            start_offset_cm: 0.0,
            end_offset_cm: 0.0,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentView {
    pub segment: SegmentResult,
    pub status: SegmentStatus,
    pub start_offset_label: String,
    pub end_offset_label: String,
    pub mark_labels: Vec<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct PlannerState {
    pub segments: Vec<SegmentView>,
    pub completed_count: u32,
    pub quantity: u32,
    pub finished: bool,
    pub unit_label: &'static str,
    pub config: Configuration,
    pub options: PlanOptions,
}

/// Cut progress. Frozen results are keyed by 0-based segment index.
#[derive(Clone, Debug, Default)]
pub struct ProgressState {
    completed_count: u32,
    frozen: BTreeMap<u32, SegmentResult>,
}

impl ProgressState {
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    pub fn frozen(&self, index: u32) -> Option<&SegmentResult> {
        self.frozen.get(&index)
    }

    pub fn status(&self, index: u32) -> SegmentStatus {
        if index < self.completed_count {
            SegmentStatus::Completed
        } else if index == self.completed_count {
            SegmentStatus::Current
        } else {
            SegmentStatus::Pending
        }
    }

    fn reset(&mut self) {
        self.completed_count = 0;
        self.frozen.clear();
    }
}

// --- MARK MAPPING ---

/// Reference point every mark position is measured from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub offset: f64, // m
    pub mark: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkScale {
    pub spacing: f64,   // m between consecutive printed marks
    pub mark_step: i64, // value increment between consecutive printed marks
}

impl MarkScale {
    pub fn for_unit(unit: CableUnit, foot_mark_step: i64) -> Self {
        match unit {
            CableUnit::Meter => Self { spacing: 1.0, mark_step: 1 },
            CableUnit::Foot => {
                let step = normalize_foot_step(foot_mark_step);
                Self { spacing: step as f64 * FOOT_IN_M, mark_step: step }
            }
        }
    }
}

fn normalize_foot_step(step: i64) -> i64 {
    if step == 1 { 1 } else { DEFAULT_FOOT_MARK_STEP }
}

pub fn mark_to_position(mark: i64, anchor: Anchor, scale: MarkScale, direction: Direction) -> f64 {
    let delta = match direction {
        Direction::Ascending => mark.saturating_sub(anchor.mark),
        Direction::Descending => anchor.mark.saturating_sub(mark),
    };
    let steps = delta as f64 / scale.mark_step as f64;
    anchor.offset + steps * scale.spacing
}

fn step_to_mark(step: i64, anchor: Anchor, scale: MarkScale, direction: Direction) -> i64 {
    let delta = step.saturating_mul(scale.mark_step);
    match direction {
        Direction::Ascending => anchor.mark.saturating_add(delta),
        Direction::Descending => anchor.mark.saturating_sub(delta),
    }
}

// --- SEGMENT PLANNING ---

/// Start and end of segment `index`, with the first uncut segment at 0.
fn segment_bounds(index: u32, completed: u32, length: f64) -> (f64, f64) {
    let rel_index = f64::from(index) - f64::from(completed);
    (rel_index * length, (rel_index + 1.0) * length)
}

pub fn plan_segment(index: u32, completed: u32, config: &Configuration, options: &PlanOptions) -> SegmentResult {
    let scale = MarkScale::for_unit(config.unit, options.foot_mark_step);
    let anchor = config.anchor();
    let (seg_start, seg_end) = segment_bounds(index, completed, config.segment_length);

    // Marks within ε·spacing of a cut line count as inside.
    let k_start = (seg_start - anchor.offset) / scale.spacing;
    let k_end = (seg_end - anchor.offset) / scale.spacing;
    let lowest = (k_start - BOUNDARY_EPSILON).ceil();
    let highest = (k_end + BOUNDARY_EPSILON).floor();
    let number = index.saturating_add(1);

    // Steps past f64's exact-integer range name no real mark.
    if !step_in_range(lowest) || !step_in_range(highest) || lowest > highest {
        return SegmentResult::without_marks(number);
    }
    let (lowest, highest) = (lowest as i64, highest as i64);

    let first = step_to_mark(lowest, anchor, scale, config.direction);
    let last = step_to_mark(highest, anchor, scale, config.direction);
    let first_pos = mark_to_position(first, anchor, scale, config.direction);
    let last_pos = mark_to_position(last, anchor, scale, config.direction);

    SegmentResult {
        index: number,
        has_marks: true,
        first_mark: Some(first),
        last_mark: Some(last),
        start_offset_cm: clamp_non_negative((first_pos - seg_start) * CM_PER_M),
        end_offset_cm: clamp_non_negative((seg_end - last_pos) * CM_PER_M),
    }
}

fn clamp_non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}

fn step_in_range(step: f64) -> bool {
    step.is_finite() && step.abs() <= MAX_EXACT_STEP
}

fn format_tenth(v: f64) -> String {
    format!("{:.1}", v)
}

/// Rounds to the tenth that `format_tenth` shows, so stored and shown values agree.
fn round_tenth(v: f64) -> f64 {
    format_tenth(v).parse().unwrap_or(0.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn clamp_quantity(raw: i64) -> u32 {
    raw.clamp(0, i64::from(MAX_QUANTITY)) as u32
}

// --- LENIENT INPUT PARSING ---

/// Longest leading `[+-]digits[.digits]` run, after leading whitespace.
fn numeric_prefix(text: &str, allow_dot: bool) -> Option<&str> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut len = 0usize;
    if len < bytes.len() && (bytes[len] == b'+' || bytes[len] == b'-') {
        len += 1;
    }

    let mut has_digit = false;
    let mut has_dot = false;
    while len < bytes.len() {
        let b = bytes[len];
        if b.is_ascii_digit() {
            has_digit = true;
            len += 1;
            continue;
        }
        if allow_dot && b == b'.' && !has_dot {
            has_dot = true;
            len += 1;
            continue;
        }
        break;
    }

    if !has_digit {
        return None;
    }
    Some(&trimmed[..len])
}

/// Reads a real the way a browser form field is read; garbage is 0.
pub fn parse_lenient_f64(text: &str) -> f64 {
    numeric_prefix(text, true)
        .and_then(|s| s.parse::<f64>().ok())
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// Integer counterpart of [`parse_lenient_f64`]; the fraction is dropped.
pub fn parse_lenient_i64(text: &str) -> i64 {
    numeric_prefix(text, false)
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0)
}

/// A form value as it may arrive from JS: number, text, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Number(f64),
    Text(String),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

impl LooseValue {
    fn to_f64(&self) -> f64 {
        match self {
            LooseValue::Number(v) => finite_or_zero(*v),
            LooseValue::Text(s) => parse_lenient_f64(s),
            LooseValue::Other(_) => 0.0,
        }
    }

    fn to_i64(&self) -> i64 {
        match self {
            LooseValue::Number(v) => finite_or_zero(*v).trunc() as i64,
            LooseValue::Text(s) => parse_lenient_i64(s),
            LooseValue::Other(_) => 0,
        }
    }

    fn text(&self) -> &str {
        match self {
            LooseValue::Text(s) => s,
            _ => "",
        }
    }
}

fn loose_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(LooseValue::deserialize(d)?.to_f64())
}

fn loose_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(LooseValue::deserialize(d)?.to_i64())
}

fn loose_quantity<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(clamp_quantity(LooseValue::deserialize(d)?.to_i64()))
}

fn loose_unit<'de, D: Deserializer<'de>>(d: D) -> Result<CableUnit, D::Error> {
    Ok(CableUnit::parse(LooseValue::deserialize(d)?.text()))
}

fn loose_direction<'de, D: Deserializer<'de>>(d: D) -> Result<Direction, D::Error> {
    Ok(Direction::parse(LooseValue::deserialize(d)?.text()))
}

// --- CUT PLANNER ---

#[wasm_bindgen]
pub struct CutBrain {
    config: Configuration,
    options: PlanOptions,
    progress: ProgressState,
}

impl Default for CutBrain {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CutBrain {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_log!("CutBrain ready");
        Self {
            config: Configuration::default(),
            options: PlanOptions::default(),
            progress: ProgressState::default(),
        }
    }

    /// Replaces the configuration from a JS object shaped like [`Configuration`].
    pub fn apply_config(&mut self, value: JsValue) {
        match serde_wasm_bindgen::from_value::<Configuration>(value) {
            Ok(config) => self.set_configuration(config),
            Err(e) => console_log!("Ignoring malformed configuration: {}", e),
        }
    }

    /// Replaces the configuration from the raw form strings.
    pub fn apply_form(&mut self, value: JsValue) {
        let raw: RawConfiguration = serde_wasm_bindgen::from_value(value).unwrap_or_default();
        self.set_raw_configuration(&raw);
    }

    pub fn set_unit(&mut self, unit: CableUnit) {
        self.config.unit = unit;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
    }

    pub fn set_rounding(&mut self, rounding: OffsetRounding) {
        self.options.rounding = rounding;
    }

    pub fn set_foot_mark_step(&mut self, step: i32) {
        self.options.foot_mark_step = normalize_foot_step(i64::from(step));
    }

    /// Records segment `index` as cut. Returns false if it is not the current one.
    pub fn commit(&mut self, index: u32) -> bool {
        match self.try_commit(index) {
            Ok(()) => true,
            Err(e) => {
                console_log!("Commit rejected: {}", e);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.progress.reset();
        console_log!("Progress reset");
    }

    /// Shifts the anchor offset by 0.2 cm in the direction of `sign`.
    pub fn nudge_anchor(&mut self, sign: f64) {
        if sign == 0.0 || sign.is_nan() {
            return;
        }
        let step = if sign > 0.0 { NUDGE_CM } else { -NUDGE_CM };
        let cm = round_tenth(self.config.anchor_offset * CM_PER_M + step);
        self.config.anchor_offset = cm / CM_PER_M;
        console_log!("Anchor offset = {} cm", cm);
    }

    pub fn completed_count(&self) -> u32 {
        self.progress.completed_count
    }

    pub fn quantity(&self) -> u32 {
        self.config.quantity
    }

    pub fn is_finished(&self) -> bool {
        self.progress.completed_count >= self.config.quantity
    }

    pub fn get_full_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.state()).unwrap_or(JsValue::NULL)
    }
}

impl CutBrain {
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// Replaces the configuration wholesale. Progress is untouched.
    pub fn set_configuration(&mut self, config: Configuration) {
        self.config = config.sanitized();
        console_log!(
            "Config: {} x {} m, anchor {} @ {} m",
            self.config.quantity,
            self.config.segment_length,
            self.config.anchor_mark_value,
            self.config.anchor_offset
        );
    }

    pub fn set_raw_configuration(&mut self, raw: &RawConfiguration) {
        self.set_configuration(Configuration::from_raw(raw));
    }

    pub fn set_options(&mut self, options: PlanOptions) {
        self.options = PlanOptions {
            rounding: options.rounding,
            foot_mark_step: normalize_foot_step(options.foot_mark_step),
        };
    }

    pub fn status(&self, index: u32) -> SegmentStatus {
        self.progress.status(index)
    }

    fn fresh_segment(&self, index: u32) -> SegmentResult {
        plan_segment(index, self.progress.completed_count, &self.config, &self.options)
    }

    fn segment(&self, index: u32) -> SegmentResult {
        if index < self.progress.completed_count {
            if let Some(frozen) = self.progress.frozen(index) {
                return *frozen;
            }
        }
        self.fresh_segment(index)
    }

    /// One result per planned segment, frozen ones as they were when cut.
    pub fn plan_all(&self) -> Vec<SegmentResult> {
        (0..self.config.quantity).map(|i| self.segment(i)).collect()
    }

    pub fn try_commit(&mut self, index: u32) -> Result<(), PlanError> {
        let current = self.progress.completed_count;
        let quantity = self.config.quantity;
        if current >= quantity {
            return Err(PlanError::Finished { quantity });
        }
        if index != current {
            return Err(PlanError::OutOfRangeCommit { index, current });
        }

        let cut = self.fresh_segment(index);
        self.progress.frozen.insert(index, cut);

        // Re-zero on the next segment's first mark so the tape starts fresh.
        if index + 1 < quantity {
            let next = self.fresh_segment(index + 1);
            if let (true, Some(mark)) = (next.has_marks, next.first_mark) {
                let cm = round_tenth(next.start_offset_cm);
                self.config.anchor_offset = cm / CM_PER_M;
                self.config.anchor_mark_value = mark;
                console_log!("Re-anchored on mark {} at {} cm", mark, cm);
            }
        }

        self.progress.completed_count = index + 1;
        console_log!("Segment {} cut ({} of {})", index + 1, index + 1, quantity);
        Ok(())
    }

    pub fn views(&self) -> Vec<SegmentView> {
        let unit = self.config.unit.label();
        let rounding = self.options.rounding;
        self.plan_all()
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let mut mark_labels = Vec::new();
                if let (Some(first), Some(last)) = (segment.first_mark, segment.last_mark) {
                    mark_labels.push(format!("{}{}", first, unit));
                    if first != last {
                        mark_labels.push(format!("{}{}", last, unit));
                    }
                }
                SegmentView {
                    segment,
                    status: self.progress.status(i as u32),
                    start_offset_label: rounding.format_cm(segment.start_offset_cm),
                    end_offset_label: rounding.format_cm(segment.end_offset_cm),
                    mark_labels,
                }
            })
            .collect()
    }

    pub fn state(&self) -> PlannerState {
        PlannerState {
            segments: self.views(),
            completed_count: self.progress.completed_count,
            quantity: self.config.quantity,
            finished: self.is_finished(),
            unit_label: self.config.unit.label(),
            config: self.config.clone(),
            options: self.options,
        }
    }
}

// --- MEASURE TOOL ---

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasureInput {
    pub start_mark: i64,
    pub start_offset_cm: f64,
    pub end_mark: i64,
    pub end_offset_cm: f64,
}

/// Total length, split so the UI can highlight a non-zero third decimal.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LengthReading {
    pub total_m: f64,
    pub main: String,
    pub highlight: Option<String>,
    pub start_label: String,
    pub end_label: String,
}

pub fn measure_length(input: &MeasureInput, unit: CableUnit) -> f64 {
    let mark_span = input.end_mark.saturating_sub(input.start_mark).unsigned_abs() as f64;
    mark_span * unit.unit_length() + (input.start_offset_cm + input.end_offset_cm) * CM_IN_M
}

fn split_reading(total_m: f64) -> (String, Option<String>) {
    let full = format!("{:.3}", total_m);
    match full.char_indices().last() {
        Some((_, '0')) | None => (format!("{:.2}", total_m), None),
        Some((at, digit)) => (full[..at].to_string(), Some(digit.to_string())),
    }
}

#[wasm_bindgen]
#[derive(Default)]
pub struct MeasureTool {
    input: MeasureInput,
    unit: CableUnit,
}

#[wasm_bindgen]
impl MeasureTool {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fields(&mut self, start_mark: &str, start_offset_cm: &str, end_mark: &str, end_offset_cm: &str) {
        self.input = MeasureInput {
            start_mark: parse_lenient_i64(start_mark),
            start_offset_cm: parse_lenient_f64(start_offset_cm),
            end_mark: parse_lenient_i64(end_mark),
            end_offset_cm: parse_lenient_f64(end_offset_cm),
        };
    }

    pub fn set_unit(&mut self, unit: CableUnit) {
        self.unit = unit;
    }

    pub fn total_m(&self) -> f64 {
        measure_length(&self.input, self.unit)
    }

    pub fn get_reading(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.reading()).unwrap_or(JsValue::NULL)
    }
}

impl MeasureTool {
    pub fn input(&self) -> &MeasureInput {
        &self.input
    }

    pub fn set_input(&mut self, input: MeasureInput) {
        self.input = input;
    }

    pub fn reading(&self) -> LengthReading {
        let total_m = self.total_m();
        let (main, highlight) = split_reading(total_m);
        let unit = self.unit.label();
        LengthReading {
            total_m,
            main,
            highlight,
            start_label: format!("{}{}", self.input.start_mark, unit),
            end_label: format!("{}{}", self.input.end_mark, unit),
        }
    }
}
