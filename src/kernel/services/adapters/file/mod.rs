//! 文件服务模块

mod local;
mod service;

pub use local::LocalFileProvider;
pub use service::FileService;
