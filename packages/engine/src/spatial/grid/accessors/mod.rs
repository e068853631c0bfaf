mod lookup;
mod particle_ops;
mod processed;
