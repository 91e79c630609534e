// Domain layer: 使用者模型、請求描述與 ports (interfaces)

pub mod model;
pub mod ports;
