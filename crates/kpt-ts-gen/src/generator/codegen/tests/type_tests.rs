use crate::generator::{
  ast::{PrimitiveKind, Type},
  codegen::types::render_type,
};

#[test]
fn test_render_scalars() {
  let cases = [
    (Type::Empty, "object"),
    (Type::Primitive(PrimitiveKind::Boolean), "boolean"),
    (Type::Primitive(PrimitiveKind::Integer), "number"),
    (Type::Primitive(PrimitiveKind::Number), "number"),
    (Type::Primitive(PrimitiveKind::String), "string"),
  ];

  for (ty, expected) in cases {
    assert_eq!(render_type("a.b.c", &ty), expected, "rendering {ty:?}");
  }
}

#[test]
fn test_render_refs_by_package() {
  assert_eq!(render_type("a.b.c", &Type::reference("a.b.c", "Widget")), "Widget");
  assert_eq!(
    render_type("io.k8s.api.core.v1", &Type::reference("io.k8s.apimachinery.meta.v1", "ObjectMeta")),
    "apimachineryMetaV1.ObjectMeta"
  );
}

#[test]
fn test_render_containers() {
  let cases = [
    (Type::array(PrimitiveKind::String.into()), "string[]"),
    (Type::array(Type::array(PrimitiveKind::String.into())), "string[][]"),
    (Type::map(PrimitiveKind::Number.into()), "{[key: string]: number}"),
    (Type::map(Type::Empty), "{[key: string]: object}"),
    (
      Type::map(Type::array(Type::reference("x.y.z", "Item"))),
      "{[key: string]: xYZ.Item[]}",
    ),
    (Type::array(Type::map(Type::reference("a.b.c", "Item"))), "{[key: string]: Item}[]"),
  ];

  for (ty, expected) in cases {
    assert_eq!(render_type("a.b.c", &ty), expected, "rendering {ty:?}");
  }
}
