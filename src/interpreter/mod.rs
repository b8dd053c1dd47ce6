mod environment;
pub mod errors;
mod function;
mod interpreter;
mod native_funcs;
pub mod object;

pub use environment::Environment;
pub use errors::{RuntimeError, RuntimeResult};
pub use function::MonkeyFn;
pub use interpreter::Interpreter;
pub use native_funcs::NativeFn;
pub use object::Object;
