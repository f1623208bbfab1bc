use glam::IVec2;

/// 4 directions, clock face order, starting from twelve o'clock.
///
/// Y grows downwards, so north is negative y.
pub const DIR_4: [IVec2; 4] = [
    IVec2::from_array([0, -1]),
    IVec2::from_array([1, 0]),
    IVec2::from_array([0, 1]),
    IVec2::from_array([-1, 0]),
];

/// Convert any 2-element integer array-like into a glam vector.
pub fn v2(a: impl Into<[i32; 2]>) -> IVec2 {
    IVec2::from(a.into())
}
