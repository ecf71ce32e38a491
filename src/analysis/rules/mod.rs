pub mod assignment_spacing;
