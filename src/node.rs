use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

const TAG_LEAF: u8 = 0;
const TAG_BRANCH: u8 = 1;

/// A decision boundary on one feature column. Rows with
/// `x[column] < value` descend left, the rest descend right.
#[derive(Debug)]
pub struct Split {
    pub column: usize,
    pub value: f64,
}

impl Split {
    pub fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u16::<BigEndian>(self.column as u16)?;
        writer.write_f64::<BigEndian>(self.value)?;

        Ok(())
    }

    pub fn deserialize<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let column = reader.read_u16::<BigEndian>()? as usize;
        let value = reader.read_f64::<BigEndian>()?;

        Ok(Self { column, value })
    }
}

#[derive(Debug)]
pub enum Node {
    Leaf(f64),
    Branch {
        split: Split,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn predict(&self, x: &[f64]) -> f64 {
        match self {
            Node::Leaf(label) => *label,
            Node::Branch { split, left, right } => {
                if x[split.column] < split.value {
                    left.predict(x)
                } else {
                    right.predict(x)
                }
            }
        }
    }

    /// Writes the node as a tag byte followed by its payload, children in
    /// left-then-right order.
    pub fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        match self {
            Node::Leaf(label) => {
                writer.write_u8(TAG_LEAF)?;
                writer.write_f64::<BigEndian>(*label)?;
            }
            Node::Branch { split, left, right } => {
                writer.write_u8(TAG_BRANCH)?;
                split.serialize(writer)?;
                left.serialize(writer)?;
                right.serialize(writer)?;
            }
        }

        Ok(())
    }

    pub fn deserialize<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        match reader.read_u8()? {
            TAG_LEAF => Ok(Node::Leaf(reader.read_f64::<BigEndian>()?)),
            TAG_BRANCH => {
                let split = Split::deserialize(reader)?;
                let left = Box::new(Node::deserialize(reader)?);
                let right = Box::new(Node::deserialize(reader)?);

                Ok(Node::Branch { split, left, right })
            }
            tag => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unknown node tag {}", tag),
            )),
        }
    }
}
