use wasm_bindgen::prelude::*;

/// Timings and counters of the last `step()`
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) body_count: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) boundary_hits: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    /// Candidate pairs examined by the narrow phase
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    /// Overlapping pairs resolved (an ordered sweep counts each pair twice)
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    /// Reflected axes across all bodies
    #[wasm_bindgen(getter)]
    pub fn boundary_hits(&self) -> u32 { self.boundary_hits }
}
