pub mod a001_gestalt_analysis;
