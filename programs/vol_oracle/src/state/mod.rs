pub mod accumulator;
pub mod manual_vol;
pub mod observation_buffer;
pub mod vol_oracle;
