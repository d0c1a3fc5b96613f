pub mod stage1_load;
pub mod stage2_weights;
pub mod stage3_scores;
pub mod stage4_rank;
pub mod stage5_report;
