//! Bindings for calling the generator and solver from JavaScript.

use js_sys::Uint32Array;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::generator::generate_complete;

fn js_error(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Generate a complete-graph puzzle of `nodes` nodes with `masked` of them uncolored, then solve and check it.
///
/// The solution comes back flattened, the token index for edge `i` at position `i`. The same `seed` always gives the same puzzle.
#[wasm_bindgen(js_name = generateAndSolve)]
pub fn generate_and_solve(nodes: usize, masked: usize, seed: u64) -> Result<Uint32Array, JsValue> {
    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = generate_complete(nodes, masked, &mut rng).map_err(js_error)?;
    let solution = puzzle.solve().map_err(js_error)?;
    solution.check().map_err(js_error)?;

    let flat = solution
        .assignment()
        .values()
        .map(|token| u32::try_from(*token).map_err(js_error))
        .collect::<Result<Vec<u32>, JsValue>>()?;

    Ok(Uint32Array::from(flat.as_slice()))
}
