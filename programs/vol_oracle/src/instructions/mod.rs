pub mod commit;
pub mod increase_observation_cardinality;
pub mod initialize_manual_vol_oracle;
pub mod initialize_observation_buffer;
pub mod initialize_vol_oracle;
pub mod record_observation;
pub mod set_annualized_vol;
pub mod stdev;
pub mod transfer_manual_vol_admin;
pub mod twap;
