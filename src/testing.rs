pub mod stage_contract;
