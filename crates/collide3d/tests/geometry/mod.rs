mod accumulator;
mod box_box_penetration;
mod compound_contacts;
mod cylinder_capsule_contacts;
mod mesh_feature_ids;
mod paged_trimesh_contacts;
mod sphere_plane_contact;
mod swap_symmetry;
mod threshold_boundary;
mod unsupported_pairs;
