pub mod plsim_vis2d;
