/// Round `value` to `num_digits` fractional digits by truncating toward zero:
/// shift the wanted digits left of the decimal point, drop the remainder and
/// shift back. Every derived value in the update chain passes through this
/// before it feeds the next stage, so the truncated figures are load-bearing.
pub fn round_value(value: f64, num_digits: u32) -> f64 {
    let shift = 10_f64.powi(num_digits as i32);
    (value * shift).trunc() / shift
}
