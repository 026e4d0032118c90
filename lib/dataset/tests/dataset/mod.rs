mod traversal;
