use wasm_bindgen::prelude::*;

/// Stable identity of a body inside one world.
///
/// `index` names an arena entry and `generation` counts how many times that
/// entry has been vacated, so a handle kept after removal never aliases a
/// later body placed in the same entry.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

#[wasm_bindgen]
impl BodyHandle {
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> u32 { self.index }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.generation }
}
