// 應用層：把 CLI 指令接到 client 並輸出結果

pub mod commands;
