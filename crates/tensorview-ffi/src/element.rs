//! Per-element-type handle tables.

use std::sync::Mutex;

use crate::handle::ViewTable;

/// An element type exposed over the C surface.
pub(crate) trait Element: Copy + Default + Send + 'static {
    /// Type name used in log records.
    const NAME: &'static str;

    /// The table holding every live view of this type.
    fn views() -> &'static Mutex<ViewTable<Self>>;
}

macro_rules! element {
    ($ty:ty, $table:ident) => {
        static $table: Mutex<ViewTable<$ty>> = Mutex::new(ViewTable::new());

        impl Element for $ty {
            const NAME: &'static str = stringify!($ty);

            fn views() -> &'static Mutex<ViewTable<Self>> {
                &$table
            }
        }
    };
}

element!(f32, F32_VIEWS);
element!(f64, F64_VIEWS);
element!(i32, I32_VIEWS);
element!(i64, I64_VIEWS);
element!(u8, U8_VIEWS);
