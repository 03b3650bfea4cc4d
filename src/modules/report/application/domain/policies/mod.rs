pub mod folder_naming;
pub mod storage_policy;
